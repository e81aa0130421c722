#[derive(Default, fieldcol::Model)]
struct Audit {
    created_at: i64,
    updated_at: i64,
}

#[derive(Default, fieldcol::Model)]
struct Account {
    id: i64,
    #[column("display_name")]
    name: String,
    #[tag("column:mail;size:255")]
    email: String,
    #[embed]
    audit: Audit,
    r#type: String,
}

fn main() {
    use fieldcol::Model as _;

    let account = Account::default();
    assert_eq!(account.fields().len(), 5);
}
