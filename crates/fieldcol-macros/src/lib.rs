extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Model, attributes(column, tag, embed))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match fieldcol_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
