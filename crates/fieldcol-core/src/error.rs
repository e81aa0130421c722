mod connection_not_found;
mod no_connections;

use connection_not_found::ConnectionNotFoundError;
use no_connections::NoConnectionsError;
use std::sync::Arc;

/// An error that can occur while resolving column names.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    ConnectionNotFound(ConnectionNotFoundError),
    NoConnections(NoConnectionsError),
}

impl Error {
    /// Creates an error for a connection name that is not registered.
    pub fn connection_not_found(name: impl Into<String>) -> Error {
        Error::from(ErrorKind::ConnectionNotFound(ConnectionNotFoundError::new(
            name.into().into_boxed_str(),
        )))
    }

    /// Creates an error for a default connection lookup on an empty registry.
    pub fn no_connections() -> Error {
        Error::from(ErrorKind::NoConnections(NoConnectionsError))
    }

    /// Returns `true` if the named connection is not registered.
    pub fn is_connection_not_found(&self) -> bool {
        matches!(*self.inner, ErrorKind::ConnectionNotFound(_))
    }

    /// Returns `true` if no connection is registered at all.
    pub fn is_no_connections(&self) -> bool {
        matches!(*self.inner, ErrorKind::NoConnections(_))
    }

    /// The connection name this error refers to, if any.
    pub fn connection_name(&self) -> Option<&str> {
        match &*self.inner {
            ErrorKind::ConnectionNotFound(err) => Some(err.name()),
            ErrorKind::NoConnections(_) => None,
        }
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&*self.inner, f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.inner).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            ConnectionNotFound(err) => core::fmt::Display::fmt(err, f),
            NoConnections(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn connection_not_found_display() {
        let err = Error::connection_not_found("analytics");
        assert_eq!(
            err.to_string(),
            "database connection not registered: analytics"
        );
        assert!(err.is_connection_not_found());
        assert!(!err.is_no_connections());
        assert_eq!(err.connection_name(), Some("analytics"));
    }

    #[test]
    fn no_connections_display() {
        let err = Error::no_connections();
        assert_eq!(
            err.to_string(),
            "no database connections registered; register one before resolving columns"
        );
        assert!(err.is_no_connections());
        assert_eq!(err.connection_name(), None);
    }

    #[test]
    fn clone_shares_kind() {
        let err = Error::connection_not_found("primary");
        let cloned = err.clone();
        assert!(cloned.is_connection_not_found());
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
