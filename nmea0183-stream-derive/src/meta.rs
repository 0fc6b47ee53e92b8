use std::fmt::Display;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Expr, Ident, Lit, Path, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetaAttributeType {
    Ignore,
    Reader,
    SkipAfter,
    SkipBefore,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "ignore" => Some(Self::Ignore),
            "reader" => Some(Self::Reader),
            "skip_after" => Some(Self::SkipAfter),
            "skip_before" => Some(Self::SkipBefore),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ignore => "ignore",
            Self::Reader => "reader",
            Self::SkipAfter => "skip_after",
            Self::SkipBefore => "skip_before",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    pub fn new(r#type: MetaAttributeType, arg: Option<TokenStream>, span: Span) -> Self {
        Self { r#type, arg, span }
    }

    pub fn is_top_level(&self) -> bool {
        matches!(self.r#type, MetaAttributeType::SkipBefore)
    }

    /// The argument of an attribute that takes one.
    ///
    /// Parsing guarantees the argument is present for those attributes, so this
    /// only yields an empty stream if called on `ignore`.
    pub fn arg(&self) -> TokenStream {
        self.arg.clone().unwrap_or_default()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                "nmea0183-stream-derive: Unknown nmea attribute",
            )
        })?;

        let arg = if attribute_type.takes_argument() {
            // read (value) or = value

            let token_stream = match attribute_type {
                MetaAttributeType::Reader => parse_argument::<Path>(input)?,
                _ => parse_argument::<Expr>(input)?,
            };
            Some(token_stream)
        } else {
            None
        };

        Ok(MetaAttribute::new(attribute_type, arg, ident.span()))
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

/// Parses `= value`, `= "value"` or `(value)`.
fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;

        if input.peek(Lit) {
            let value = Lit::parse(input)?;
            return match value {
                Lit::Str(string) => {
                    let parsed: P = string.parse()?;
                    Ok(quote! { #parsed })
                }
                Lit::Int(int) => Ok(quote! { #int }),
                _ => Err(Error::new(
                    value.span(),
                    "nmea0183-stream-derive: Unexpected type for nmea attribute content",
                )),
            };
        }

        let parsed: P = input.parse()?;
        Ok(quote! { #parsed })
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-stream-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

fn collect_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    Ok(attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .collect())
}

fn reject_duplicate(
    meta_attr: &MetaAttribute,
    seen: &mut std::collections::HashSet<MetaAttributeType>,
) -> Result<()> {
    if !seen.insert(meta_attr.r#type) {
        return Err(Error::new(
            meta_attr.span(),
            format!(
                "nmea0183-stream-derive: Duplicate nmea attribute `{}`",
                meta_attr.r#type
            ),
        ));
    }
    Ok(())
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    collect_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !meta_attr.is_top_level() {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-stream-derive: Attribute `{}` is not allowed at the top level",
                        meta_attr.r#type
                    ),
                ));
            }

            reject_duplicate(&meta_attr, &mut attributes_set)?;
            Ok(meta_attr)
        })
        .collect()
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    let attributes = collect_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            reject_duplicate(&meta_attr, &mut attributes_set)?;
            Ok(meta_attr)
        })
        .collect::<Result<Vec<_>>>()?;

    // An ignored field consumes nothing, so it cannot have a reader.
    let ignore = attributes
        .iter()
        .find(|attr| attr.r#type == MetaAttributeType::Ignore);
    let reader = attributes
        .iter()
        .find(|attr| attr.r#type == MetaAttributeType::Reader);
    if let (Some(_), Some(reader)) = (ignore, reader) {
        return Err(Error::new(
            reader.span(),
            "nmea0183-stream-derive: Attribute `reader` cannot be used with `ignore` attribute.",
        ));
    }

    Ok(attributes)
}
