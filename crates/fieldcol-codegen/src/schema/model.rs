use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let fields = match &ast.fields {
            syn::Fields::Named(node) => Some(node),
            // `struct Marker;` has no columns, which is fine.
            syn::Fields::Unit => None,
            syn::Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.fields,
                    "model fields must be named",
                ));
            }
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut model_fields = vec![];

        for node in fields.into_iter().flat_map(|node| node.named.iter()) {
            model_fields.extend(errs.check(Field::from_ast(node)));
        }

        errs.finish(Self {
            ident: ast.ident.clone(),
            fields: model_fields,
        })
    }
}
