use proc_macro2::TokenStream;
use quote::format_ident;
use syn::{Fields, Ident, Result, Type};

use crate::{
    config::Config,
    generate::skip_fields,
    meta::{self, MetaAttribute, MetaAttributeType},
    reader::Reader,
};

#[derive(Clone)]
pub struct FieldReader {
    pub variable_name: Ident,
    pub reader: Reader,
    pub pre_exec: Option<TokenStream>,
    pub post_exec: Option<TokenStream>,
}

#[derive(Clone)]
pub struct StructReader {
    pub empty: bool,
    pub unnamed: bool,
    pub readers: Vec<FieldReader>,
}

impl StructReader {
    pub fn from_fields(fields: &Fields, config: &Config) -> Result<Self> {
        let (empty, unnamed) = match fields {
            Fields::Named(_) => (false, false),
            Fields::Unnamed(_) => (false, true),
            Fields::Unit => (true, false),
        };

        let mut readers = vec![];
        for (index, field) in fields.iter().enumerate() {
            let variable_name = field
                .ident
                .clone()
                .unwrap_or_else(|| format_ident!("_nmea_unnamed_{index}"));
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            let reader = Self::get_reader(&field.ty, &attributes, config);

            let mut pre_exec = None;
            let mut post_exec = None;
            for attribute in &attributes {
                match attribute.r#type {
                    MetaAttributeType::SkipBefore => {
                        pre_exec = Some(skip_fields(&attribute.arg(), config));
                    }
                    MetaAttributeType::SkipAfter => {
                        post_exec = Some(skip_fields(&attribute.arg(), config));
                    }
                    _ => {}
                }
            }

            readers.push(FieldReader {
                variable_name,
                reader,
                pre_exec,
                post_exec,
            });
        }

        Ok(Self {
            empty,
            unnamed,
            readers,
        })
    }

    fn get_reader(ty: &Type, attributes: &[MetaAttribute], config: &Config) -> Reader {
        let cursor = config.cursor_name.clone();

        for attribute in attributes {
            match attribute.r#type {
                MetaAttributeType::Ignore => return Reader::Default(Box::new(ty.clone())),
                MetaAttributeType::Reader => {
                    return Reader::Function {
                        path: attribute.arg(),
                        cursor,
                    };
                }
                _ => {}
            }
        }

        Reader::Type {
            ty: Box::new(ty.clone()),
            cursor,
        }
    }
}

impl FieldReader {
    pub fn uses_cursor(&self) -> bool {
        !matches!(self.reader, Reader::Default(_))
            || self.pre_exec.is_some()
            || self.post_exec.is_some()
    }
}
