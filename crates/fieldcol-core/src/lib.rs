mod error;
pub use error::Error;

pub mod naming;
pub use naming::NamingStrategy;

pub mod schema;
pub use schema::Model;

/// A Result type alias that uses fieldcol's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
