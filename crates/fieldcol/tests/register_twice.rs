//! The only test in this binary, so the global column count is stable.

use fieldcol::{cache, column_name, db, ColumnRef, Connection};
use pretty_assertions::assert_eq;

use std::sync::LazyLock;

#[derive(Debug, Default, fieldcol::Model)]
struct Invoice {
    number: String,
    issued_at: i64,
}

static INVOICE: LazyLock<Invoice> = LazyLock::new(Invoice::default);

#[test]
fn registering_twice_adds_nothing() {
    db::register(Connection::new(fieldcol::DEFAULT_CONNECTION));

    fieldcol::register_model("", &*INVOICE).unwrap();
    let columns = cache::columns().len();
    let models = cache::models().len();
    assert_eq!(columns, 2);

    fieldcol::register("", &[&*INVOICE]).unwrap();
    assert_eq!(cache::columns().len(), columns);
    assert_eq!(cache::models().len(), models);

    let invoice = fieldcol::model::<Invoice>();
    assert!(std::ptr::eq(invoice, &*INVOICE));
    assert_eq!(column_name(ColumnRef::field(&INVOICE.number)), "number");
    assert_eq!(column_name(ColumnRef::field(&INVOICE.issued_at)), "issued_at");
    assert_eq!(cache::columns().len(), columns);
}
