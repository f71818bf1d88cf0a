use serde_json::Value;

use super::{load_for_update, AddCommands, BaseArgs};
use crate::error::Result;
use crate::models::{Product, ProductKind};
use crate::settings::Paths;
use crate::store::save_products;
use crate::validation::RawRecord;

fn base_record(base: &BaseArgs) -> RawRecord {
    let mut record = RawRecord::new();
    record.insert("name".into(), Value::from(base.name.as_str()));
    record.insert("date_of_receipt".into(), Value::from(base.received.as_str()));
    record.insert("count".into(), Value::from(base.count));
    if let Some(date) = &base.written_off {
        record.insert("date_of_write_off".into(), Value::from(date.as_str()));
    }
    record
}

/// The raw record an `add` invocation describes, validated like a loaded one.
pub(crate) fn build_record(command: &AddCommands) -> (ProductKind, RawRecord) {
    match command {
        AddCommands::Generic { base } => (ProductKind::Generic, base_record(base)),
        AddCommands::Clothing {
            base,
            size,
            color,
            material,
        } => {
            let mut record = base_record(base);
            record.insert("size".into(), Value::from(size.as_str()));
            record.insert("color".into(), Value::from(color.as_str()));
            record.insert("material".into(), Value::from(material.as_str()));
            (ProductKind::Clothing, record)
        }
        AddCommands::Furniture {
            base,
            material,
            dimensions,
            weight,
        } => {
            let mut record = base_record(base);
            record.insert("material".into(), Value::from(material.as_str()));
            record.insert("dimensions".into(), Value::from(dimensions.as_str()));
            record.insert("weight".into(), Value::from(*weight));
            (ProductKind::Furniture, record)
        }
    }
}

pub fn run(paths: &Paths, command: &AddCommands) -> Result<()> {
    let (kind, record) = build_record(command);
    let product = Product::from_record(kind, &record)?;

    let mut products = load_for_update(paths)?;
    println!("Added {}: {}", kind.label().to_lowercase(), product.name());
    products.push(product);
    save_products(&paths.data_file, &products)?;
    Ok(())
}
