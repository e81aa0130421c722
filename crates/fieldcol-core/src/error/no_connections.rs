/// Error when a default connection is needed but none is registered.
#[derive(Debug)]
pub(super) struct NoConnectionsError;

impl std::error::Error for NoConnectionsError {}

impl core::fmt::Display for NoConnectionsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no database connections registered; register one before resolving columns")
    }
}
