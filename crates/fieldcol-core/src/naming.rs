//! Naming conventions turning declared field names into column names.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use std::fmt;

/// Per-connection convention for deriving column names.
pub trait NamingStrategy: Send + Sync + fmt::Debug {
    /// Column name for the field declared as `field`. `table` is a hint and
    /// may be empty.
    fn column_name(&self, table: &str, field: &str) -> String;
}

/// Letter case applied to a declared name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Case {
    /// `created_at`; acronyms stay one word, `UserID` becomes `user_id`
    #[default]
    Snake,

    /// `createdAt`
    Camel,

    /// `CreatedAt`
    Pascal,

    /// `CREATED_AT`
    ScreamingSnake,

    /// `created-at`
    Kebab,

    /// The declared name, unchanged
    Verbatim,
}

impl Case {
    pub fn apply(self, name: &str) -> String {
        match self {
            Case::Snake => name.to_snake_case(),
            Case::Camel => name.to_lower_camel_case(),
            Case::Pascal => name.to_upper_camel_case(),
            Case::ScreamingSnake => name.to_shouty_snake_case(),
            Case::Kebab => name.to_kebab_case(),
            Case::Verbatim => name.to_string(),
        }
    }
}

impl NamingStrategy for Case {
    fn column_name(&self, _table: &str, field: &str) -> String {
        self.apply(field)
    }
}

/// The built-in naming strategy.
///
/// Replacements run first, in insertion order, on the declared name. The
/// result is then cased, unless `no_lower_case` is set in which case it is
/// used as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Naming {
    pub case: Case,
    pub replacer: Vec<(String, String)>,
    pub no_lower_case: bool,
}

impl Naming {
    pub fn new() -> Naming {
        Naming::default()
    }

    pub fn case(mut self, case: Case) -> Naming {
        self.case = case;
        self
    }

    /// Replace every occurrence of `from` with `to` before casing.
    pub fn replace(mut self, from: impl Into<String>, to: impl Into<String>) -> Naming {
        self.replacer.push((from.into(), to.into()));
        self
    }

    pub fn no_lower_case(mut self, no_lower_case: bool) -> Naming {
        self.no_lower_case = no_lower_case;
        self
    }
}

impl NamingStrategy for Naming {
    fn column_name(&self, _table: &str, field: &str) -> String {
        let replaced = self
            .replacer
            .iter()
            .filter(|(from, _)| !from.is_empty())
            .fold(field.to_string(), |name, (from, to)| {
                name.replace(from.as_str(), to)
            });

        if self.no_lower_case {
            replaced
        } else {
            self.case.apply(&replaced)
        }
    }
}
