use fieldcol_core::naming::{Case, Naming, NamingStrategy};

#[test]
fn default_naming_is_snake_case() {
    let naming = Naming::default();

    assert_eq!(naming.column_name("", "Id"), "id");
    assert_eq!(naming.column_name("", "CreatedAt"), "created_at");
    assert_eq!(naming.column_name("", "created_at"), "created_at");
}

#[test]
fn snake_case_keeps_acronyms_together() {
    let naming = Naming::default();

    assert_eq!(naming.column_name("", "UserID"), "user_id");
    assert_eq!(naming.column_name("", "HTTPStatus"), "http_status");
}

#[test]
fn other_cases() {
    assert_eq!(Case::Camel.column_name("", "created_at"), "createdAt");
    assert_eq!(Case::Pascal.column_name("", "created_at"), "CreatedAt");
    assert_eq!(Case::ScreamingSnake.column_name("", "created_at"), "CREATED_AT");
    assert_eq!(Case::Kebab.column_name("", "CreatedAt"), "created-at");
    assert_eq!(Case::Verbatim.column_name("", "CreatedAt"), "CreatedAt");
}

#[test]
fn replacements_run_before_casing() {
    let naming = Naming::new().replace("Cid", "Code");
    assert_eq!(naming.column_name("", "CidNumber"), "code_number");
}

#[test]
fn replacements_apply_in_order() {
    let naming = Naming::new().replace("a", "b").replace("b", "c");
    assert_eq!(naming.column_name("", "a"), "c");
}

#[test]
fn empty_replacement_source_is_ignored() {
    let naming = Naming::new().replace("", "x");
    assert_eq!(naming.column_name("", "Name"), "name");
}

#[test]
fn no_lower_case_skips_casing() {
    let naming = Naming::new().no_lower_case(true).replace("Old", "New");
    assert_eq!(naming.column_name("", "OldName"), "NewName");
}

#[test]
fn table_hint_does_not_change_column() {
    let naming = Naming::new().case(Case::Camel);
    assert_eq!(
        naming.column_name("accounts", "created_at"),
        naming.column_name("", "created_at")
    );
}
