use proc_macro2::{Span, TokenStream};
use syn::{Ident, Result};

use crate::meta::{MetaAttribute, MetaAttributeType};

#[derive(Clone)]
pub struct Config {
    pub cursor_name: Ident,
    pub skip_before: Option<TokenStream>,
}

impl Config {
    pub fn from_meta_attributes(attribute_list: &[MetaAttribute]) -> Result<Self> {
        let skip_before = attribute_list
            .iter()
            .find(|meta| meta.r#type == MetaAttributeType::SkipBefore)
            .map(MetaAttribute::arg);

        Ok(Self {
            cursor_name: Ident::new("nmea_cursor", Span::call_site()),
            skip_before,
        })
    }
}
