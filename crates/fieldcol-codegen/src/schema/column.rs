#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }

    /// The column as a tag setting. `;` separates settings, so it is escaped
    /// inside the name.
    pub(crate) fn to_tag(&self) -> syn::LitStr {
        let name = self.name.value().replace(';', "\\;");
        syn::LitStr::new(&format!("column:{name}"), self.name.span())
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        // Allowed syntax:
        //
        // #[column("name")]
        let name: syn::LitStr = input.parse()?;

        if name.value().is_empty() {
            return Err(syn::Error::new_spanned(&name, "column name cannot be empty"));
        }

        if !input.is_empty() {
            return Err(input.error("expected a single column name"));
        }

        Ok(Column { name })
    }
}
