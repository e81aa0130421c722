use crate::ColumnRef;

/// Options accepted when obtaining models and building queries.
#[derive(Debug, Clone, Default)]
pub struct Options {
    conn_name: Option<String>,
    selects: Vec<ColumnRef>,
    omits: Vec<ColumnRef>,
    ignore_total: bool,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    /// Selects the connection whose naming strategy applies.
    pub fn conn(mut self, name: impl Into<String>) -> Options {
        self.conn_name = Some(name.into());
        self
    }

    /// Adds a column to select.
    pub fn select(mut self, column: impl Into<ColumnRef>) -> Options {
        self.selects.push(column.into());
        self
    }

    /// Adds a column to leave out.
    pub fn omit(mut self, column: impl Into<ColumnRef>) -> Options {
        self.omits.push(column.into());
        self
    }

    /// Skips the total row count of paginated queries.
    pub fn ignore_total(mut self) -> Options {
        self.ignore_total = true;
        self
    }

    pub fn conn_name(&self) -> Option<&str> {
        self.conn_name.as_deref()
    }

    pub fn selects(&self) -> &[ColumnRef] {
        &self.selects
    }

    pub fn omits(&self) -> &[ColumnRef] {
        &self.omits
    }

    pub fn is_total_ignored(&self) -> bool {
        self.ignore_total
    }

    /// Names of the selected columns. References that do not resolve are
    /// left out.
    pub fn selected_columns(&self) -> Vec<String> {
        resolve_all(&self.selects)
    }

    /// Names of the omitted columns. References that do not resolve are left
    /// out.
    pub fn omitted_columns(&self) -> Vec<String> {
        resolve_all(&self.omits)
    }
}

fn resolve_all(columns: &[ColumnRef]) -> Vec<String> {
    columns
        .iter()
        .filter_map(ColumnRef::try_resolve)
        .filter(|column| !column.is_empty())
        .collect()
}
