//! # A Rust procedural macro for NMEA 0183 field records
//!
//! `nmea0183-stream-derive` generates [`ReadFields`] implementations that read a
//! struct's fields, in declaration order, from an NMEA 0183 sentence payload.
//!
//! It is meant to be used through the `derive` feature of [`nmea0183-stream`],
//! which re-exports the macro next to the trait it implements.
//!
//! [`nmea0183-stream`]: https://crates.io/crates/nmea0183-stream
//! [`ReadFields`]: https://docs.rs/nmea0183-stream/latest/nmea0183_stream/trait.ReadFields.html

use generate::generate_read_fields_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;
mod reader;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(ReadFields, attributes(nmea))]
pub fn derive_read_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_read_fields_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
