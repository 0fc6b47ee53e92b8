use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Generics, Path, Result, WhereClause, parse_quote};

use crate::{config::Config, generate::structs::Struct};

mod structs;

// Usage:
// #[derive(ReadFields)]
// #[nmea(skip_before = 1)]
// pub struct MySentence {
//     #[nmea(reader = nmea0183_stream::latitude)]
//     pub latitude: Option<Coordinate>,
//     #[nmea(ignore)]
//     pub computed_field: u32,
//     #[nmea(skip_after = 2)]
//     pub another_field: Option<f64>,
// }

trait Generator {
    fn name(&self) -> &Path;
    fn config(&self) -> &Config;
    fn generics(&self) -> &Generics;
    fn generate_read_body(&self) -> Result<TokenStream>;

    fn generate_read_decl(&self) -> TokenStream {
        let cursor = &self.config().cursor_name;

        quote! {
            fn read_fields(#cursor: &mut nmea0183_stream::FieldCursor<'_>) -> Self
        }
    }

    fn generate_impl(&self) -> Result<TokenStream> {
        let name = self.name();
        let decl = self.generate_read_decl();
        let body = self.generate_read_body()?;
        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // If there is no where clause, create a new one
        let mut impl_where: WhereClause = if where_clause.is_some() {
            parse_quote!(#where_clause)
        } else {
            parse_quote!(where)
        };

        // Make sure generic parameters implement ReadField
        for param in generics.type_params() {
            let param = &param.ident;
            impl_where
                .predicates
                .push(parse_quote!(#param: nmea0183_stream::ReadField));
        }

        Ok(quote! {
            impl #impl_generics nmea0183_stream::ReadFields for #name #ty_generics #impl_where {
                #decl
                {
                    #body
                }
            }
        })
    }
}

/// `nmea_cursor.skip_fields(n);` for a `skip_before`/`skip_after` argument.
pub fn skip_fields(count: &TokenStream, config: &Config) -> TokenStream {
    let cursor = &config.cursor_name;
    quote! {
        #cursor.skip_fields(#count);
    }
}

pub fn generate_read_fields_impl(input: &DeriveInput) -> Result<TokenStream> {
    let generator: Box<dyn Generator> = match &input.data {
        Data::Struct(datastruct) => {
            let name = &input.ident;
            let attributes = &input.attrs;
            let generics = &input.generics;

            Box::new(Struct::from_datastruct(
                name, datastruct, attributes, generics,
            )?)
        }
        Data::Enum(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-stream-derive: Enums not supported; read the discriminating field and dispatch by hand",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-stream-derive: Unions not supported",
            ));
        }
    };

    generator.generate_impl()
}
