use super::{FieldToken, Model, TagSettings};

use std::any::Any;
use std::fmt;

/// Declaration metadata of a single struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    /// The field name as declared on the struct
    pub name: &'static str,

    /// Settings string, `key:value` pairs separated by `;`
    pub tag: Option<&'static str>,
}

impl FieldDecl {
    pub const fn new(name: &'static str) -> FieldDecl {
        FieldDecl { name, tag: None }
    }

    pub const fn with_tag(self, tag: &'static str) -> FieldDecl {
        FieldDecl {
            tag: Some(tag),
            ..self
        }
    }

    /// Parsed tag settings. Empty when the field carries no tag.
    pub fn settings(&self) -> TagSettings {
        self.tag.map(TagSettings::parse).unwrap_or_default()
    }

    /// Column name given explicitly through the `COLUMN` tag setting.
    ///
    /// An empty value does not count as an override.
    pub fn column_override(&self) -> Option<String> {
        let tag = self.tag?;
        TagSettings::parse(tag)
            .get("COLUMN")
            .filter(|column| !column.is_empty())
            .map(str::to_string)
    }
}

/// A declared field, borrowed from a live model instance.
pub struct Field<'a> {
    pub decl: FieldDecl,
    pub kind: FieldKind<'a>,
}

pub enum FieldKind<'a> {
    /// A plain field backed by a column.
    Column(FieldToken),

    /// A sub-structure whose fields are flattened into the owning model.
    Embedded(&'a dyn Model),

    /// A field without storage (`()`, `PhantomData`, ...). Zero-sized slots
    /// do not have an address of their own, so they never map to a column.
    ZeroSized,
}

impl<'a> Field<'a> {
    pub fn column<F: Any>(decl: FieldDecl, field: &'a F) -> Field<'a> {
        let kind = if std::mem::size_of::<F>() == 0 {
            FieldKind::ZeroSized
        } else {
            FieldKind::Column(FieldToken::of(field))
        };

        Field { decl, kind }
    }

    pub fn embedded<M: Model>(decl: FieldDecl, model: &'a M) -> Field<'a> {
        Field {
            decl,
            kind: FieldKind::Embedded(model),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, FieldKind::Embedded(_))
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("decl", &self.decl)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Debug for FieldKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Column(token) => f.debug_tuple("Column").field(token).finish(),
            FieldKind::Embedded(model) => f
                .debug_tuple("Embedded")
                .field(&model.type_name())
                .finish(),
            FieldKind::ZeroSized => f.write_str("ZeroSized"),
        }
    }
}
