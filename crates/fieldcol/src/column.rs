use crate::{cache, FieldToken, Function};

use std::any::Any;

/// A reference to a column, as accepted by query-building code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    /// A column name, used as is
    Literal(String),

    /// A field of a registered model instance
    Field(FieldToken),

    /// A SQL expression, used as is
    Expression(String),
}

impl ColumnRef {
    /// Refers to the column backing `field`.
    ///
    /// `field` should borrow a field of a canonical instance (see
    /// [`model`](crate::model)); fields of other instances do not resolve.
    pub fn field<F: Any>(field: &F) -> ColumnRef {
        ColumnRef::Field(FieldToken::of(field))
    }

    /// The column name or expression text, or an empty string when a field
    /// reference does not resolve.
    pub fn resolve(&self) -> String {
        self.try_resolve().unwrap_or_default()
    }

    /// Like [`resolve`](Self::resolve), but `None` when a field reference
    /// does not resolve.
    pub fn try_resolve(&self) -> Option<String> {
        match self {
            ColumnRef::Literal(name) => Some(name.clone()),
            ColumnRef::Expression(expr) => Some(expr.clone()),
            ColumnRef::Field(token) => {
                let column = cache::columns().lookup(*token);
                if column.is_none() {
                    tracing::trace!(?token, "field reference did not resolve");
                }
                column
            }
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, ColumnRef::Field(_))
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> ColumnRef {
        ColumnRef::Literal(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> ColumnRef {
        ColumnRef::Literal(name)
    }
}

impl From<&String> for ColumnRef {
    fn from(name: &String) -> ColumnRef {
        ColumnRef::Literal(name.clone())
    }
}

impl From<FieldToken> for ColumnRef {
    fn from(token: FieldToken) -> ColumnRef {
        ColumnRef::Field(token)
    }
}

impl From<Function> for ColumnRef {
    fn from(function: Function) -> ColumnRef {
        ColumnRef::Expression(function.into_string())
    }
}

impl From<&Function> for ColumnRef {
    fn from(function: &Function) -> ColumnRef {
        ColumnRef::Expression(function.as_str().to_string())
    }
}

/// Resolves `column` to the name to use in a query.
///
/// Literals and expressions come back unchanged; field references are looked
/// up in the column cache and yield an empty string when unknown.
pub fn column_name(column: impl Into<ColumnRef>) -> String {
    column.into().resolve()
}
