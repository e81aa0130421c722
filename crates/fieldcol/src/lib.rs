//! Resolve struct fields to database column names.
//!
//! Every model type has one canonical, process-wide instance. The addresses of
//! its fields identify columns: registering a model walks its fields
//! (flattening embedded structs), resolves each field to a column name through
//! the connection's naming strategy or an explicit `column` tag, and caches the
//! result keyed by the field's [`FieldToken`]. Query code can then refer to a
//! column by borrowing the field of the canonical instance instead of spelling
//! the name out.

pub mod cache;

mod column;
pub use column::{column_name, ColumnRef};

pub mod db;
pub use db::{Connection, DEFAULT_CONNECTION};

mod function;
pub use function::Function;

mod options;
pub use options::Options;

mod register;
pub use register::{model, model_with, register, register_model, try_model, try_model_with};

pub mod resolve;

pub use fieldcol_core::{
    naming::{Case, Naming, NamingStrategy},
    schema::{FieldDecl, FieldToken, TagSettings},
    Error, Model, Result,
};

pub use fieldcol_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use fieldcol_core::schema::{Field, FieldDecl, Model};
    pub use std::vec::Vec;
}
