//! Implementation of `#[derive(Cursors)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, parse_macro_input};

/// Entry point of the `Cursors` derive.
pub fn derive_cursors_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_field_cursors(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Cursors can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Cursors cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_field_cursors(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    let Fields::Named(named_fields) = fields else {
        return syn::Error::new_spanned(
            name,
            "Cursors can only be derived for structs with named fields.",
        )
        .to_compile_error();
    };

    let methods = named_fields.named.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        let method_name = format_ident!("{}_cursor", field_name);
        let doc = format!("Returns a cursor on the `{field_name}` field.");

        Some(quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> ::peekpoke::cursor::FunctionCursor<
                Self,
                #field_type,
                #field_type,
                Self,
                fn(&Self) -> #field_type,
                fn(Self, #field_type) -> Self,
            >
            where
                #field_type: ::std::clone::Clone,
            {
                let peek: fn(&Self) -> #field_type =
                    |source| ::std::clone::Clone::clone(&source.#field_name);
                let poke: fn(Self, #field_type) -> Self = |mut source, value| {
                    source.#field_name = value;
                    source
                };
                ::peekpoke::cursor::FunctionCursor::new(peek, poke)
            }
        })
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}
