//! Registered database connections, as far as column naming is concerned.
//!
//! Connections are kept in registration order. When a caller does not name a
//! connection, [`DEFAULT_CONNECTION`] is used if registered, otherwise the
//! first connection that was registered.

use crate::{Error, Result};

use fieldcol_core::naming::{Naming, NamingStrategy};
use indexmap::IndexMap;
use parking_lot::RwLock;

use std::fmt;
use std::sync::{Arc, LazyLock};

/// Name of the connection used when callers do not pick one.
pub const DEFAULT_CONNECTION: &str = "default";

static CONNECTIONS: LazyLock<RwLock<IndexMap<String, Connection>>> =
    LazyLock::new(|| RwLock::new(IndexMap::new()));

/// A named connection and the naming strategy of its columns.
#[derive(Clone)]
pub struct Connection {
    name: String,
    naming: Arc<dyn NamingStrategy>,
}

impl Connection {
    /// A connection using the default snake case naming.
    pub fn new(name: impl Into<String>) -> Connection {
        Connection {
            name: name.into(),
            naming: Arc::new(Naming::default()),
        }
    }

    pub fn with_naming(mut self, naming: impl NamingStrategy + 'static) -> Connection {
        self.naming = Arc::new(naming);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn naming(&self) -> &dyn NamingStrategy {
        &*self.naming
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("name", &self.name)
            .field("naming", &self.naming)
            .finish()
    }
}

/// Registers `connection` under its name.
///
/// Registering a name again replaces the connection but keeps the position
/// the name was first registered at.
pub fn register(connection: Connection) {
    tracing::debug!(conn = connection.name(), "registered connection");
    CONNECTIONS
        .write()
        .insert(connection.name.clone(), connection);
}

/// The connection registered under `name`.
pub fn get(name: &str) -> Option<Connection> {
    CONNECTIONS.read().get(name).cloned()
}

/// All registered connection names, in registration order.
pub fn names() -> Vec<String> {
    CONNECTIONS.read().keys().cloned().collect()
}

/// Name of the connection used when none is given.
pub fn default_name() -> Result<String> {
    default_name_in(&CONNECTIONS.read())
}

/// The connection called `name`, or the default connection when `name` is
/// empty.
pub fn resolve(name: &str) -> Result<Connection> {
    let connections = CONNECTIONS.read();

    let name = if name.is_empty() {
        default_name_in(&connections)?
    } else {
        name.to_string()
    };

    connections
        .get(&name)
        .cloned()
        .ok_or_else(|| Error::connection_not_found(name))
}

fn default_name_in(connections: &IndexMap<String, Connection>) -> Result<String> {
    if connections.contains_key(DEFAULT_CONNECTION) {
        return Ok(DEFAULT_CONNECTION.to_string());
    }

    connections
        .keys()
        .next()
        .cloned()
        .ok_or_else(Error::no_connections)
}
