/// Error when a connection name does not match any registered connection.
#[derive(Debug)]
pub(super) struct ConnectionNotFoundError {
    name: Box<str>,
}

impl ConnectionNotFoundError {
    pub(super) fn new(name: Box<str>) -> Self {
        ConnectionNotFoundError { name }
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }
}

impl std::error::Error for ConnectionNotFoundError {}

impl core::fmt::Display for ConnectionNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "database connection not registered: {}", self.name)
    }
}
