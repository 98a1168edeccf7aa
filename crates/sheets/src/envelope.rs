//! gviz wrapped-JSON envelope and row mapping.
//!
//! The `tqx=out:json` export is not raw JSON: the payload is wrapped in a
//! fixed-length non-JSON prefix and suffix. Stripping is by fixed offsets,
//! never by content matching.

use serde::Deserialize;
use serde_json::Value;

use vitrine_catalog::Product;

use crate::error::ParseError;

/// Canonical prefix emitted by the export (exactly [`ENVELOPE_PREFIX_LEN`]
/// bytes).
pub const ENVELOPE_PREFIX: &str = "/*O_o*/\ngoogle.visualization.Query.setResponse(";

/// Canonical suffix closing the callback.
pub const ENVELOPE_SUFFIX: &str = ");";

pub const ENVELOPE_PREFIX_LEN: usize = ENVELOPE_PREFIX.len();
pub const ENVELOPE_SUFFIX_LEN: usize = ENVELOPE_SUFFIX.len();

// Fixed cell positions in the sheet.
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_CATEGORY: usize = 2;
const COL_TAGS: usize = 3;
const COL_IMAGE_URL: usize = 4;
const COL_DESCRIPTION: usize = 5;
const COL_STATUS: usize = 6;
const COL_CREATED_AT: usize = 7;
const COL_DRIVE_FILE_ID: usize = 8;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<Value>,
}

/// Strip exactly the fixed envelope, returning the interior text.
pub fn strip_envelope(body: &str) -> Result<&str, ParseError> {
    let end = body
        .len()
        .checked_sub(ENVELOPE_SUFFIX_LEN)
        .filter(|end| *end >= ENVELOPE_PREFIX_LEN)
        .ok_or(ParseError::TruncatedEnvelope)?;
    body.get(ENVELOPE_PREFIX_LEN..end)
        .ok_or(ParseError::TruncatedEnvelope)
}

/// Parse a full export body into the published product list.
///
/// The first table row is the header and is skipped. Remaining rows map by
/// fixed cell position; rows without both a name and an image are dropped
/// silently — absence of optional data is expected, not exceptional.
pub fn parse_export(body: &str) -> Result<Vec<Product>, ParseError> {
    let payload = strip_envelope(body)?;
    let response: GvizResponse = serde_json::from_str(payload)?;

    let products = response
        .table
        .rows
        .into_iter()
        .skip(1)
        .enumerate()
        .map(|(position, row)| product_from_row(&row, position))
        .filter(Product::is_publishable)
        .collect();

    Ok(products)
}

/// `position` is 0-based among data rows; the id fallback is 1-based.
fn product_from_row(row: &GvizRow, position: usize) -> Product {
    Product {
        id: cell_id(row, COL_ID, position),
        name: cell_text(row, COL_NAME),
        category: cell_text(row, COL_CATEGORY),
        tags: cell_text(row, COL_TAGS),
        image_url: cell_text(row, COL_IMAGE_URL),
        description: cell_text(row, COL_DESCRIPTION),
        status: cell_text_or(row, COL_STATUS, Product::ACTIVE_STATUS),
        created_at: cell_text(row, COL_CREATED_AT),
        drive_file_id: cell_text(row, COL_DRIVE_FILE_ID),
    }
}

fn cell_value<'a>(row: &'a GvizRow, index: usize) -> Option<&'a Value> {
    row.c.get(index)?.as_ref()?.v.as_ref()
}

/// Render a cell as text. Numeric cells (the export types detected columns)
/// are rendered as their decimal text; anything missing is empty.
fn cell_text(row: &GvizRow, index: usize) -> String {
    match cell_value(row, index) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn cell_text_or(row: &GvizRow, index: usize, default: &str) -> String {
    let text = cell_text(row, index);
    if text.is_empty() { default.to_string() } else { text }
}

fn cell_id(row: &GvizRow, index: usize, position: usize) -> i64 {
    let fallback = position as i64 + 1;
    match cell_value(row, index) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(fallback),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(fallback),
        _ => fallback,
    }
}
