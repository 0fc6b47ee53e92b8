use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DataStruct, Generics, Ident, Path, Result, parse_quote};

use crate::{
    config::Config,
    generate::{Generator, skip_fields, structs::reader::StructReader},
    meta,
};

pub mod reader;

pub struct Struct {
    pub name: Path,
    pub config: Config,
    pub generics: Generics,
    pub struct_reader: StructReader,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        let attributes = meta::parse_top_level_attributes(attributes)?;
        let config = Config::from_meta_attributes(&attributes)?;
        let struct_reader = StructReader::from_fields(&datastruct.fields, &config)?;

        Ok(Self {
            name: parse_quote!(#name),
            config,
            generics: generics.clone(),
            struct_reader,
        })
    }
}

impl Generator for Struct {
    fn name(&self) -> &Path {
        &self.name
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn generics(&self) -> &Generics {
        &self.generics
    }

    fn generate_read_body(&self) -> Result<TokenStream> {
        let name = &self.name;
        let pre_exec = self
            .config
            .skip_before
            .as_ref()
            .map(|count| skip_fields(count, &self.config));

        let (variable_name, reader): (Vec<_>, Vec<_>) = self
            .struct_reader
            .readers
            .iter()
            .map(|field_reader| (&field_reader.variable_name, &field_reader.reader))
            .unzip();

        let (field_pre_exec, field_post_exec): (Vec<_>, Vec<_>) = self
            .struct_reader
            .readers
            .iter()
            .map(|field_reader| {
                (
                    field_reader.pre_exec.as_ref(),
                    field_reader.post_exec.as_ref(),
                )
            })
            .unzip();

        let struct_def = match (self.struct_reader.empty, self.struct_reader.unnamed) {
            (true, _) => quote! { #name },
            (_, true) => quote! { #name(#(#variable_name),*) },
            (_, false) => quote! { #name { #(#variable_name),* } },
        };

        // Unit structs and all-ignored structs never touch the cursor.
        let cursor = &self.config.cursor_name;
        let uses_cursor = pre_exec.is_some()
            || self
                .struct_reader
                .readers
                .iter()
                .any(|field_reader| field_reader.uses_cursor());
        let silence_unused = (!uses_cursor).then(|| quote! { let _ = #cursor; });

        Ok(quote! {
            #silence_unused
            #pre_exec
            #(#field_pre_exec let #variable_name = #reader; #field_post_exec)*
            #struct_def
        })
    }
}
