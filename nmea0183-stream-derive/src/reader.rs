use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Type};

/// How a single struct field gets its value.
#[derive(Clone)]
pub enum Reader {
    /// `Default::default()`, no field consumed.
    Default(Box<Type>),
    /// A user function `fn(&mut FieldCursor<'_>) -> T`.
    Function { path: TokenStream, cursor: Ident },
    /// The field type's own `ReadField` implementation.
    Type { ty: Box<Type>, cursor: Ident },
}

impl ToTokens for Reader {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let token_stream = match self {
            Self::Default(ty) => {
                quote! { <#ty as ::core::default::Default>::default() }
            }
            Self::Function { path, cursor } => {
                quote! { (#path)(#cursor) }
            }
            Self::Type { ty, cursor } => {
                quote! { <#ty as nmea0183_stream::ReadField>::read_field(#cursor) }
            }
        };

        tokens.extend(token_stream);
    }
}
