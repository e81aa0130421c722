use crate::ColumnRef;

use std::fmt;

/// A SQL expression used in place of a column, such as `COUNT(id)`.
///
/// Column arguments are resolved when the expression is built, so field
/// references must belong to registered models by then.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    expr: String,
}

impl Function {
    pub fn new(expr: impl Into<String>) -> Function {
        Function { expr: expr.into() }
    }

    pub fn count(column: impl Into<ColumnRef>) -> Function {
        Function::call("COUNT", column)
    }

    pub fn sum(column: impl Into<ColumnRef>) -> Function {
        Function::call("SUM", column)
    }

    pub fn avg(column: impl Into<ColumnRef>) -> Function {
        Function::call("AVG", column)
    }

    pub fn max(column: impl Into<ColumnRef>) -> Function {
        Function::call("MAX", column)
    }

    pub fn min(column: impl Into<ColumnRef>) -> Function {
        Function::call("MIN", column)
    }

    /// `<expr> AS <alias>`
    pub fn alias(&self, alias: impl Into<ColumnRef>) -> Function {
        Function::new(format!("{} AS {}", self.expr, alias.into().resolve()))
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    pub fn into_string(self) -> String {
        self.expr
    }

    fn call(name: &str, column: impl Into<ColumnRef>) -> Function {
        Function::new(format!("{name}({})", column.into().resolve()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}
