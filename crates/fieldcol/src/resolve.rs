//! Field to column name resolution.

use crate::{db, Connection, Result};

use fieldcol_core::schema::{self, FieldDecl, FieldToken};
use fieldcol_core::Model;

use std::collections::HashMap;

/// Column name of a single declared field.
///
/// An explicit `column` tag setting wins. Otherwise the naming strategy of
/// connection `conn` is applied to the declared name, `conn` falling back to
/// the default connection when empty. The connection is not looked up when
/// the field has an explicit column.
pub fn column_name_for(decl: &FieldDecl, conn: &str) -> Result<String> {
    let mut connection = None;
    column_name_with(decl, conn, &mut connection)
}

/// Resolves every leaf field of `model` to its column name.
///
/// Embedded structs are flattened, so the map has one entry per leaf field,
/// keyed by the field's token within `model`. The connection is only looked up
/// if some field has no explicit column.
pub fn column_map(model: &dyn Model, conn: &str) -> Result<HashMap<FieldToken, String>> {
    let mut columns = HashMap::new();
    let mut connection = None;

    for leaf in schema::leaves(model) {
        let column = column_name_with(&leaf.decl, conn, &mut connection)?;

        tracing::trace!(
            model = model.type_name(),
            field = leaf.decl.name,
            column = %column,
            "resolved field"
        );

        columns.insert(leaf.token, column);
    }

    Ok(columns)
}

/// Resolves `decl`, looking up connection `conn` into `connection` the first
/// time it is needed.
fn column_name_with(
    decl: &FieldDecl,
    conn: &str,
    connection: &mut Option<Connection>,
) -> Result<String> {
    if let Some(column) = decl.column_override() {
        return Ok(column);
    }

    let connection = match connection {
        Some(connection) => connection,
        None => connection.insert(db::resolve(conn)?),
    };

    Ok(connection.naming().column_name("", decl.name))
}
