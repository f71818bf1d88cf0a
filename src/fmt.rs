use crate::models::Product;

/// Human-readable file size: 512 B, 1.5 KB, 2.0 MB.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

/// The kind-specific attributes of a product on one line.
pub fn details(product: &Product) -> String {
    match product {
        Product::Generic(_) => String::new(),
        Product::Clothing(c) => format!(
            "Size: {}, Color: {}, Material: {}",
            c.size, c.color, c.material
        ),
        Product::Furniture(f) => format!(
            "Material: {}, Dimensions: {}, Weight: {}",
            f.material, f.dimensions, f.weight
        ),
    }
}
