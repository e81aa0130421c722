use crate::{cache, db, resolve, Options, Result};

use fieldcol_core::Model;

use std::any::type_name;

/// Registers `models` as the canonical instances of their types.
///
/// Each model's fields are resolved to column names under connection `conn`
/// (the default connection when empty) and cached, then the model is cached as
/// the instance [`model`] returns for its type, replacing any earlier one.
/// Registering the same model again is harmless: it resolves to the same
/// names.
pub fn register(conn: &str, models: &[&'static dyn Model]) -> Result<()> {
    for &model in models {
        register_one(conn, model)?;
    }

    Ok(())
}

/// Registers a single model, see [`register`].
pub fn register_model<T: Model>(conn: &str, model: &'static T) -> Result<()> {
    register_one(conn, model)
}

/// The canonical instance of `T`, registered under the default connection
/// on first use.
///
/// # Panics
///
/// Panics if `T` is not registered yet and no connection is registered.
pub fn model<T: Model + Default>() -> &'static T {
    model_with(&Options::default())
}

/// The canonical instance of `T`, registered under the connection selected by
/// `options` on first use.
///
/// # Panics
///
/// Panics if `T` is not registered yet and the selected connection does not
/// exist.
pub fn model_with<T: Model + Default>(options: &Options) -> &'static T {
    match try_model_with(options) {
        Ok(model) => model,
        Err(err) => panic!("failed to register `{}`: {err}", type_name::<T>()),
    }
}

/// Fallible version of [`model`].
pub fn try_model<T: Model + Default>() -> Result<&'static T> {
    try_model_with(&Options::default())
}

/// Fallible version of [`model_with`].
///
/// Repeated calls return the same instance, so tokens taken from its fields
/// stay valid. Concurrent first calls agree on a single instance.
pub fn try_model_with<T: Model + Default>(options: &Options) -> Result<&'static T> {
    cache::models().get_or_try_insert_with(|| {
        let conn = match options.conn_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => db::default_name()?,
        };

        // Columns are resolved against the boxed instance before it is leaked;
        // leaking does not move it, so the tokens stay valid.
        let instance = Box::new(T::default());
        store_columns(&conn, &*instance)?;

        let instance: &'static T = Box::leak(instance);
        tracing::debug!(model = type_name::<T>(), conn = %conn, "created canonical instance");

        Ok(instance)
    })
}

fn register_one(conn: &str, model: &'static dyn Model) -> Result<()> {
    store_columns(conn, model)?;
    cache::models().insert(model);
    Ok(())
}

fn store_columns(conn: &str, model: &dyn Model) -> Result<()> {
    let columns = resolve::column_map(model, conn)?;

    tracing::debug!(
        model = model.type_name(),
        conn,
        columns = columns.len(),
        "registered model columns"
    );

    cache::columns().extend(columns);
    Ok(())
}
