//! Nothing in this binary registers a connection.

use fieldcol::{column_name, ColumnRef};

#[derive(Debug, Default, fieldcol::Model)]
struct Ledger {
    balance: i64,
}

#[derive(Debug, Default, fieldcol::Model)]
struct Tagged {
    #[column("entry_id")]
    id: i64,
    #[tag("column:posted_on")]
    posted: String,
}

#[derive(Debug, Default, fieldcol::Model)]
struct Journal {
    memo: String,
}

#[test]
fn model_without_connections_fails() {
    let err = fieldcol::try_model::<Ledger>().unwrap_err();
    assert!(err.is_no_connections());
    assert!(!fieldcol::cache::models().contains::<Ledger>());
}

#[test]
fn explicit_connection_must_exist() {
    static LEDGER: Ledger = Ledger { balance: 0 };

    let err = fieldcol::register("missing", &[&LEDGER]).unwrap_err();
    assert!(err.is_connection_not_found());
    assert_eq!(err.connection_name(), Some("missing"));
}

#[test]
fn tagged_fields_need_no_connection() {
    static TAGGED: Tagged = Tagged {
        id: 0,
        posted: String::new(),
    };

    fieldcol::register("", &[&TAGGED]).unwrap();

    assert_eq!(column_name(ColumnRef::field(&TAGGED.id)), "entry_id");
    assert_eq!(column_name(ColumnRef::field(&TAGGED.posted)), "posted_on");
}

#[test]
#[should_panic(expected = "no database connections")]
fn model_panics_without_connections() {
    let _ = fieldcol::model::<Journal>();
}
