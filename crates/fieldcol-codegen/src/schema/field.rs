use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Explicit column name: `#[column("name")]`
    pub(crate) column: Option<Column>,

    /// Raw settings string: `#[tag("column:name;size:64")]`
    pub(crate) tag: Option<syn::LitStr>,

    /// True if the field is annotated with `#[embed]`
    pub(crate) embed: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("tag") {
                if attrs.tag.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[tag] attribute"));
                } else {
                    attrs.tag = errs.check(attr.parse_args());
                }
            } else if attr.path().is_ident("embed") {
                if attrs.embed {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[embed] attribute",
                    ));
                } else {
                    attrs.embed = errs.check(attr.meta.require_path_only()).is_some();
                }
            }
        }

        if attrs.column.is_some() && attrs.tag.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "#[column] and #[tag] cannot be combined; put the column in the tag",
            ));
        }

        if attrs.embed && (attrs.column.is_some() || attrs.tag.is_some()) {
            errs.push(syn::Error::new_spanned(
                field,
                "embedded fields cannot have a column name",
            ));
        }

        errs.finish(Self {
            ident: ident.clone(),
            attrs,
        })
    }

    /// The declared name, without any `r#` prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// The tag emitted for the field, if any.
    pub(crate) fn tag(&self) -> Option<syn::LitStr> {
        match (&self.attrs.column, &self.attrs.tag) {
            (Some(column), _) => Some(column.to_tag()),
            (None, Some(tag)) => Some(tag.clone()),
            (None, None) => None,
        }
    }
}
