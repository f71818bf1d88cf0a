use std::path::Path;

use serde_json::Value;

use crate::error::{Result, WarehouseError};
use crate::log::LogSink;
use crate::models::{Product, ProductKind};
use crate::validation::RawRecord;

/// Decide the kind of a record from the fields it carries.
///
/// Clothing is checked before furniture, so a record holding both field sets
/// is clothing. Anything else is a generic product.
pub fn infer_kind(record: &RawRecord) -> ProductKind {
    const PRECEDENCE: [ProductKind; 2] = [ProductKind::Clothing, ProductKind::Furniture];
    PRECEDENCE
        .into_iter()
        .find(|kind| {
            kind.discriminating_fields()
                .iter()
                .all(|field| record.contains_key(*field))
        })
        .unwrap_or(ProductKind::Generic)
}

/// Build every valid product from an id -> record mapping, in document order.
///
/// Records that fail are reported to `log` with their id and skipped.
pub fn parse_records(data: &RawRecord, log: &mut dyn LogSink) -> Vec<Product> {
    let mut products = Vec::with_capacity(data.len());
    for (key, item) in data {
        let Some(record) = item.as_object() else {
            log.error(&format!(
                "Unexpected error processing product {key}: expected an object, got {}",
                value_type(item)
            ));
            continue;
        };
        let kind = infer_kind(record);
        match Product::from_record(kind, record) {
            Ok(product) => products.push(product),
            Err(e) => log.error(&format!("Error processing product {key}: {e}")),
        }
    }
    tracing::debug!(loaded = products.len(), total = data.len(), "parsed records");
    products
}

/// Load products from a JSON document. A missing or malformed file is
/// logged and yields no products.
pub fn parse_file(path: &Path, log: &mut dyn LogSink) -> Vec<Product> {
    match read_document(path) {
        Ok(data) => parse_records(&data, log),
        Err(e) => {
            log.error(&format!("Error opening or reading file {}: {e}", path.display()));
            Vec::new()
        }
    }
}

fn read_document(path: &Path) -> Result<RawRecord> {
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(WarehouseError::Other(format!(
            "top-level value must be an object, got {}",
            value_type(&other)
        ))),
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
