use crate::schema::{Field, Model};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn model(model: &Model) -> TokenStream {
    let fieldcol = quote!(_fieldcol::codegen_support);
    let model_ident = &model.ident;
    let capacity = model.fields.len();
    let fields = model.fields.iter().map(|field| expand_field(field, &fieldcol));

    wrap_in_const(quote! {
        impl #fieldcol::Model for #model_ident {
            fn fields(&self) -> #fieldcol::Vec<#fieldcol::Field<'_>> {
                let mut fields = #fieldcol::Vec::with_capacity(#capacity);
                #( fields.push(#fields); )*
                fields
            }
        }
    })
}

fn expand_field(field: &Field, fieldcol: &TokenStream) -> TokenStream {
    let ident = &field.ident;
    let name = field.name();
    let tag = match field.tag() {
        Some(tag) => quote!(::core::option::Option::Some(#tag)),
        None => quote!(::core::option::Option::None),
    };

    let decl = quote! {
        #fieldcol::FieldDecl {
            name: #name,
            tag: #tag,
        }
    };

    if field.attrs.embed {
        quote!(#fieldcol::Field::embedded(#decl, &self.#ident))
    } else {
        quote!(#fieldcol::Field::column(#decl, &self.#ident))
    }
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use fieldcol as _fieldcol;
            #code
        };
    }
}
