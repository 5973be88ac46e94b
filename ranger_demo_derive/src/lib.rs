use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

/// Lets a node payload be handed to an `rclrs` worker.
///
/// Every type parameter of a generic payload picks up `Send + Sync + 'static`,
/// since the worker moves the payload onto the executor.
#[proc_macro_derive(WorkerNode)]
pub fn derive_work_scope(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let mut generics = input.generics;
    let params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(parse_quote!(#param: ::core::marker::Send + ::core::marker::Sync + 'static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics rclrs::WorkScope for #name #ty_generics #where_clause {
            type Payload = Self;
        }
    };

    TokenStream::from(expanded)
}
