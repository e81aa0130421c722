//! Process-wide caches backing column resolution.
//!
//! Both caches only grow: entries are created by registration and live for the
//! rest of the process.

use crate::Result;

use dashmap::DashMap;
use fieldcol_core::schema::{AsAny, FieldToken};
use fieldcol_core::Model;
use parking_lot::RwLock;

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static COLUMNS: LazyLock<ColumnCache> = LazyLock::new(ColumnCache::new);

static MODELS: LazyLock<ModelCache> = LazyLock::new(ModelCache::new);

/// The process-wide column name cache.
pub fn columns() -> &'static ColumnCache {
    &COLUMNS
}

/// The process-wide canonical instance cache.
pub fn models() -> &'static ModelCache {
    &MODELS
}

/// Maps field tokens to resolved column names.
#[derive(Debug, Default)]
pub struct ColumnCache {
    columns: DashMap<FieldToken, String>,
}

impl ColumnCache {
    pub fn new() -> ColumnCache {
        ColumnCache::default()
    }

    /// Inserts or overwrites the column name of `token`.
    pub fn store(&self, token: FieldToken, column: impl Into<String>) {
        self.columns.insert(token, column.into());
    }

    pub fn extend(&self, columns: impl IntoIterator<Item = (FieldToken, String)>) {
        for (token, column) in columns {
            self.columns.insert(token, column);
        }
    }

    /// The column name stored for `token`.
    pub fn lookup(&self, token: FieldToken) -> Option<String> {
        self.columns.get(&token).map(|column| column.value().clone())
    }

    pub fn contains(&self, token: FieldToken) -> bool {
        self.columns.contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Maps model types to their canonical instance.
#[derive(Default)]
pub struct ModelCache {
    models: RwLock<HashMap<TypeId, &'static dyn Model>>,
}

impl ModelCache {
    pub fn new() -> ModelCache {
        ModelCache::default()
    }

    /// The canonical instance of `T`, if one is cached.
    pub fn get<T: Model>(&self) -> Option<&'static T> {
        let model = *self.models.read().get(&TypeId::of::<T>())?;
        downcast::<T>(model)
    }

    /// Caches `model` as the canonical instance of its type, replacing any
    /// previous instance.
    pub fn insert(&self, model: &'static dyn Model) {
        let key = AsAny::as_any(model).type_id();
        self.insert_keyed(key, model);
    }

    /// Returns the canonical instance of `T`, creating it with `create` when
    /// missing.
    ///
    /// `create` runs without any lock held, so it may itself look up or
    /// create other models. Racing callers may each run `create`, but only the
    /// first instance published is kept and every caller gets that one. An
    /// error from `create` leaves the cache untouched.
    pub fn get_or_try_insert_with<T, F>(&self, create: F) -> Result<&'static T>
    where
        T: Model,
        F: FnOnce() -> Result<&'static T>,
    {
        if let Some(model) = self.get::<T>() {
            return Ok(model);
        }

        let created = create()?;

        let mut models = self.models.write();

        if let Some(&existing) = models.get(&TypeId::of::<T>()) {
            match downcast::<T>(existing) {
                Some(model) => return Ok(model),
                None => tracing::warn!(
                    expected = std::any::type_name::<T>(),
                    found = existing.type_name(),
                    "cached model has unexpected type; rebuilding"
                ),
            }
        }

        models.insert(TypeId::of::<T>(), created);
        Ok(created)
    }

    pub fn contains<T: Model>(&self) -> bool {
        self.get::<T>().is_some()
    }

    pub fn len(&self) -> usize {
        self.models.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.read().is_empty()
    }

    fn insert_keyed(&self, key: TypeId, model: &'static dyn Model) {
        self.models.write().insert(key, model);
    }
}

impl fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let models = self.models.read();
        f.debug_list()
            .entries(models.values().map(|model| model.type_name()))
            .finish()
    }
}

fn downcast<T: Model>(model: &'static dyn Model) -> Option<&'static T> {
    AsAny::as_any(model).downcast_ref::<T>()
}
