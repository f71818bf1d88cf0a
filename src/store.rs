use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::models::Product;
use crate::validation::RawRecord;

/// The whole collection as one document keyed `Prod1..ProdN` in order.
pub fn to_document(products: &[Product]) -> RawRecord {
    products
        .iter()
        .enumerate()
        .map(|(idx, product)| (format!("Prod{}", idx + 1), Value::Object(product.to_record())))
        .collect()
}

/// Replace the file at `path` with the given collection.
pub fn save_products(path: &Path, products: &[Product]) -> Result<()> {
    let json = serde_json::to_string_pretty(&to_document(products))?;
    std::fs::write(path, format!("{json}\n"))?;
    tracing::debug!(path = %path.display(), count = products.len(), "saved inventory");
    Ok(())
}

/// Create an empty inventory document unless one already exists.
/// Returns whether a file was created.
pub fn init_store(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    save_products(path, &[])?;
    Ok(true)
}
