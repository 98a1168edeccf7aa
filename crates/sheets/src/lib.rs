//! Catalog Adapter: translates the Google Sheets gviz table export into the
//! published product list.
//!
//! `envelope` is the pure half (wrapper stripping + row mapping); `client`
//! is the IO half (one HTTP GET per invocation, idempotent, no other side
//! effects).

pub mod client;
pub mod envelope;
pub mod error;

pub use client::{SheetsClient, SheetsConfig};
pub use envelope::parse_export;
pub use error::{AdapterError, ParseError};
