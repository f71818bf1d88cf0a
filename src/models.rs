use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::Value;

use crate::validation::{
    format_date, integer_field, non_empty_text_field, parse_dimensions, parse_write_off_date,
    receipt_date_field, require_fields, text_field, write_off_date_field, RawRecord,
    ValidationError, ValidationResult,
};

/// Shown in place of a write-off date for items still in stock.
pub const NOT_WRITTEN_OFF: &str = "Not written off";

const BASE_FIELDS: &[&str] = &["name", "date_of_receipt", "count"];
const CLOTHING_FIELDS: &[&str] = &["size", "color", "material"];
const FURNITURE_FIELDS: &[&str] = &["material", "dimensions", "weight"];

// ---------------------------------------------------------------------------
// Product kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Generic,
    Clothing,
    Furniture,
}

impl ProductKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Clothing => "clothing",
            Self::Furniture => "furniture",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Clothing => "Clothing",
            Self::Furniture => "Furniture",
        }
    }

    /// Fields whose joint presence marks a record as this kind.
    pub fn discriminating_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Generic => &[],
            Self::Clothing => CLOTHING_FIELDS,
            Self::Furniture => FURNITURE_FIELDS,
        }
    }
}

pub const ALL_KINDS: &[ProductKind] = &[
    ProductKind::Generic,
    ProductKind::Clothing,
    ProductKind::Furniture,
];

// ---------------------------------------------------------------------------
// Clothing sizes
// ---------------------------------------------------------------------------

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
    XXXL,
}

impl Size {
    pub const ALL: [Size; 7] = [
        Size::XS,
        Size::S,
        Size::M,
        Size::L,
        Size::XL,
        Size::XXL,
        Size::XXXL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XS => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
            Self::XXL => "XXL",
            Self::XXXL => "XXXL",
        }
    }
}

impl FromStr for Size {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSize(s.to_string()))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Attributes every product carries, validated before any kind-specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseFields {
    pub name: String,
    pub date_of_receipt: NaiveDate,
    pub date_of_write_off: Option<NaiveDate>,
    pub count: i64,
}

impl BaseFields {
    fn from_record(record: &RawRecord, kind: ProductKind) -> ValidationResult<Self> {
        require_fields(record, BASE_FIELDS, kind.key())?;
        let date_of_receipt = receipt_date_field(record)?;
        let date_of_write_off = write_off_date_field(record)?;
        // Negative counts are accepted as-is.
        let count = integer_field(record, "count")?;
        let name = non_empty_text_field(record, "name")?.to_string();
        Ok(Self {
            name,
            date_of_receipt,
            date_of_write_off,
            count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clothing {
    pub base: BaseFields,
    pub size: Size,
    pub color: String,
    pub material: String,
}

impl Clothing {
    pub fn from_record(record: &RawRecord) -> ValidationResult<Self> {
        let base = BaseFields::from_record(record, ProductKind::Clothing)?;
        require_fields(record, CLOTHING_FIELDS, ProductKind::Clothing.key())?;
        let size = match record.get("size") {
            Some(Value::String(s)) => s.parse::<Size>()?,
            other => {
                let raw = other.map(Value::to_string).unwrap_or_default();
                return Err(ValidationError::InvalidSize(raw));
            }
        };
        let color = non_empty_text_field(record, "color")?.to_string();
        let material = non_empty_text_field(record, "material")?.to_string();
        Ok(Self {
            base,
            size,
            color,
            material,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Furniture {
    pub base: BaseFields,
    pub material: String,
    /// Kept exactly as supplied once it parses as `WxLxH`.
    pub dimensions: String,
    pub weight: i64,
}

impl Furniture {
    pub fn from_record(record: &RawRecord) -> ValidationResult<Self> {
        let base = BaseFields::from_record(record, ProductKind::Furniture)?;
        require_fields(record, FURNITURE_FIELDS, ProductKind::Furniture.key())?;
        let material = text_field(record, "material")?.to_string();
        let dimensions = text_field(record, "dimensions")?;
        parse_dimensions(dimensions)?;
        let weight = integer_field(record, "weight")?;
        if weight < 0 {
            return Err(ValidationError::NegativeWeight(weight));
        }
        Ok(Self {
            base,
            material,
            dimensions: dimensions.to_string(),
            weight,
        })
    }
}

/// A validated inventory item. Items of different kinds never compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    Generic(BaseFields),
    Clothing(Clothing),
    Furniture(Furniture),
}

impl Product {
    /// Build a product of the given kind, or fail without constructing anything.
    pub fn from_record(kind: ProductKind, record: &RawRecord) -> ValidationResult<Self> {
        match kind {
            ProductKind::Generic => {
                BaseFields::from_record(record, ProductKind::Generic).map(Self::Generic)
            }
            ProductKind::Clothing => Clothing::from_record(record).map(Self::Clothing),
            ProductKind::Furniture => Furniture::from_record(record).map(Self::Furniture),
        }
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            Self::Generic(_) => ProductKind::Generic,
            Self::Clothing(_) => ProductKind::Clothing,
            Self::Furniture(_) => ProductKind::Furniture,
        }
    }

    pub fn base(&self) -> &BaseFields {
        match self {
            Self::Generic(base) => base,
            Self::Clothing(c) => &c.base,
            Self::Furniture(f) => &f.base,
        }
    }

    fn base_mut(&mut self) -> &mut BaseFields {
        match self {
            Self::Generic(base) => base,
            Self::Clothing(c) => &mut c.base,
            Self::Furniture(f) => &mut f.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn count(&self) -> i64 {
        self.base().count
    }

    pub fn is_written_off(&self) -> bool {
        self.base().date_of_write_off.is_some()
    }

    pub fn formatted_date_of_receipt(&self) -> String {
        format_date(self.base().date_of_receipt)
    }

    pub fn formatted_date_of_write_off(&self) -> String {
        match self.base().date_of_write_off {
            Some(date) => format_date(date),
            None => NOT_WRITTEN_OFF.to_string(),
        }
    }

    /// Set (or overwrite) the write-off date. It may not precede the receipt date.
    pub fn set_write_off_date(&mut self, raw: &str) -> ValidationResult<()> {
        let date = parse_write_off_date(raw)?;
        let base = self.base_mut();
        if date < base.date_of_receipt {
            return Err(ValidationError::WriteOffBeforeReceipt {
                write_off: format_date(date),
                receipt: format_date(base.date_of_receipt),
            });
        }
        base.date_of_write_off = Some(date);
        Ok(())
    }

    /// The on-disk record: base fields plus only the fields of this kind.
    pub fn to_record(&self) -> RawRecord {
        let base = self.base();
        let mut record = RawRecord::new();
        record.insert("name".into(), Value::from(base.name.as_str()));
        record.insert(
            "date_of_receipt".into(),
            Value::from(self.formatted_date_of_receipt()),
        );
        record.insert("count".into(), Value::from(base.count));
        if let Some(date) = base.date_of_write_off {
            record.insert("date_of_write_off".into(), Value::from(format_date(date)));
        }
        match self {
            Self::Generic(_) => {}
            Self::Clothing(c) => {
                record.insert("size".into(), Value::from(c.size.as_str()));
                record.insert("color".into(), Value::from(c.color.as_str()));
                record.insert("material".into(), Value::from(c.material.as_str()));
            }
            Self::Furniture(f) => {
                record.insert("material".into(), Value::from(f.material.as_str()));
                record.insert("dimensions".into(), Value::from(f.dimensions.as_str()));
                record.insert("weight".into(), Value::from(f.weight));
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    fn generic(value: Value) -> ValidationResult<Product> {
        Product::from_record(ProductKind::Generic, &record(value))
    }

    fn shirt() -> Value {
        json!({
            "name": "Shirt",
            "date_of_receipt": "10.04.2025",
            "count": 10,
            "size": "M",
            "color": "Red",
            "material": "Cotton"
        })
    }

    fn table() -> Value {
        json!({
            "name": "Table",
            "date_of_receipt": "10.04.2025",
            "count": 3,
            "material": "Wood",
            "dimensions": "100x50x30",
            "weight": 20
        })
    }

    fn with(mut base: Value, key: &str, value: Value) -> Value {
        base[key] = value;
        base
    }

    fn without(mut base: Value, key: &str) -> Value {
        base.as_object_mut().unwrap().remove(key);
        base
    }

    #[test]
    fn test_generic_valid() {
        let product = generic(json!({"name": "Product A", "date_of_receipt": "10.04.2025", "count": 5})).unwrap();
        assert_eq!(product.kind(), ProductKind::Generic);
        assert_eq!(product.name(), "Product A");
        assert_eq!(product.count(), 5);
        assert_eq!(product.formatted_date_of_receipt(), "10.04.2025");
        assert_eq!(product.formatted_date_of_write_off(), NOT_WRITTEN_OFF);
        assert!(!product.is_written_off());
    }

    #[test]
    fn test_generic_missing_field() {
        let err = generic(json!({"name": "Product A", "date_of_receipt": "10.04.2025"})).unwrap_err();
        assert_eq!(err.field(), Some("count"));
        assert!(err.to_string().contains("'count'"));
    }

    #[test]
    fn test_generic_invalid_date() {
        let err = generic(json!({"name": "Product A", "date_of_receipt": "2025-04-10", "count": 5})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidReceiptDate("2025-04-10".to_string()));
    }

    #[test]
    fn test_short_or_padded_years_rejected() {
        for bad in ["10.04.25", "10.04.+2025", " 10.04.2025"] {
            let err = generic(json!({"name": "A", "date_of_receipt": bad, "count": 1})).unwrap_err();
            assert_eq!(err, ValidationError::InvalidReceiptDate(bad.to_string()));

            let err = generic(json!({
                "name": "A", "date_of_receipt": "10.04.2025", "count": 1,
                "date_of_write_off": bad
            }))
            .unwrap_err();
            assert_eq!(err, ValidationError::InvalidWriteOffDate(bad.to_string()));
        }

        let mut product = generic(json!({"name": "A", "date_of_receipt": "10.04.2025", "count": 1})).unwrap();
        assert!(product.set_write_off_date("15.04.25").is_err());
        assert!(!product.is_written_off());
    }

    #[test]
    fn test_generic_count_must_be_integer_typed() {
        let err = generic(json!({"name": "A", "date_of_receipt": "10.04.2025", "count": "5"})).unwrap_err();
        assert_eq!(err, ValidationError::NotInteger("count"));
    }

    #[test]
    fn test_generic_negative_count_is_accepted() {
        let product = generic(json!({"name": "A", "date_of_receipt": "10.04.2025", "count": -4})).unwrap();
        assert_eq!(product.count(), -4);
    }

    #[test]
    fn test_generic_empty_name_rejected() {
        let err = generic(json!({"name": "", "date_of_receipt": "10.04.2025", "count": 1})).unwrap_err();
        assert_eq!(err, ValidationError::EmptyText("name"));
    }

    #[test]
    fn test_receipt_checked_before_count() {
        let err = generic(json!({"name": "A", "date_of_receipt": "bad", "count": "x"})).unwrap_err();
        assert_eq!(err.field(), Some("date_of_receipt"));
    }

    #[test]
    fn test_write_off_from_record() {
        let product = generic(json!({
            "name": "A", "date_of_receipt": "10.04.2025", "count": 1,
            "date_of_write_off": "20.04.2025"
        }))
        .unwrap();
        assert_eq!(product.formatted_date_of_write_off(), "20.04.2025");

        let err = generic(json!({
            "name": "A", "date_of_receipt": "10.04.2025", "count": 1,
            "date_of_write_off": "20/04/2025"
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("date_of_write_off"));
    }

    #[test]
    fn test_construction_does_not_order_write_off_against_receipt() {
        let product = generic(json!({
            "name": "A", "date_of_receipt": "10.04.2025", "count": 1,
            "date_of_write_off": "01.01.2020"
        }))
        .unwrap();
        assert_eq!(product.formatted_date_of_write_off(), "01.01.2020");
    }

    #[test]
    fn test_clothing_valid() {
        let product = Product::from_record(ProductKind::Clothing, &record(shirt())).unwrap();
        let Product::Clothing(c) = &product else { panic!("expected clothing") };
        assert_eq!(c.size, Size::M);
        assert_eq!(c.color, "Red");
        assert_eq!(c.material, "Cotton");
        assert_eq!(product.name(), "Shirt");
    }

    #[test]
    fn test_clothing_every_listed_size() {
        for size in ["XS", "S", "M", "L", "XL", "XXL", "XXXL"] {
            let rec = record(with(shirt(), "size", json!(size)));
            let c = Clothing::from_record(&rec).unwrap();
            assert_eq!(c.size.as_str(), size);
        }
    }

    #[test]
    fn test_clothing_invalid_size() {
        for bad in [json!("XX"), json!("m"), json!(""), json!(42)] {
            let err = Clothing::from_record(&record(with(shirt(), "size", bad))).unwrap_err();
            assert_eq!(err.field(), Some("size"));
        }
    }

    #[test]
    fn test_clothing_missing_fields() {
        for field in ["size", "color", "material", "name", "date_of_receipt", "count"] {
            let err = Clothing::from_record(&record(without(shirt(), field))).unwrap_err();
            assert_eq!(err.field(), Some(field), "missing {field}");
            assert!(matches!(err, ValidationError::MissingField { .. }));
        }
    }

    #[test]
    fn test_base_checks_run_before_variant_checks() {
        let rec = record(with(without(shirt(), "color"), "date_of_receipt", json!("nope")));
        let err = Clothing::from_record(&rec).unwrap_err();
        assert_eq!(err.field(), Some("date_of_receipt"));
    }

    #[test]
    fn test_furniture_valid() {
        let product = Product::from_record(ProductKind::Furniture, &record(table())).unwrap();
        let Product::Furniture(f) = &product else { panic!("expected furniture") };
        assert_eq!(f.dimensions, "100x50x30");
        assert_eq!(f.weight, 20);
        assert_eq!(f.material, "Wood");
    }

    #[test]
    fn test_furniture_dimensions() {
        for (dims, ok) in [
            ("100x50x30", true),
            ("100x50", false),
            ("0x50x30", false),
            ("ax50x30", false),
        ] {
            let result = Furniture::from_record(&record(with(table(), "dimensions", json!(dims))));
            assert_eq!(result.is_ok(), ok, "dimensions {dims}");
        }
        let err = Furniture::from_record(&record(with(table(), "dimensions", json!(100)))).unwrap_err();
        assert_eq!(err, ValidationError::NotText("dimensions"));
    }

    #[test]
    fn test_furniture_weight() {
        let err = Furniture::from_record(&record(with(table(), "weight", json!(-1)))).unwrap_err();
        assert_eq!(err, ValidationError::NegativeWeight(-1));
        let err = Furniture::from_record(&record(with(table(), "weight", json!("20")))).unwrap_err();
        assert_eq!(err, ValidationError::NotInteger("weight"));
        assert!(Furniture::from_record(&record(with(table(), "weight", json!(0)))).is_ok());
    }

    #[test]
    fn test_furniture_missing_field() {
        let err = Furniture::from_record(&record(without(table(), "weight"))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField { field: "weight", kind: "furniture" }
        );
    }

    #[test]
    fn test_equality() {
        let a = Product::from_record(ProductKind::Clothing, &record(shirt())).unwrap();
        let b = Product::from_record(ProductKind::Clothing, &record(shirt())).unwrap();
        assert_eq!(a, b);

        let c = Product::from_record(ProductKind::Clothing, &record(with(shirt(), "color", json!("Blue")))).unwrap();
        assert_ne!(a, c);

        let d = Product::from_record(ProductKind::Clothing, &record(with(shirt(), "count", json!(11)))).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_different_kinds_never_equal() {
        let shirt = record(shirt());
        let as_generic = Product::from_record(ProductKind::Generic, &shirt).unwrap();
        let as_clothing = Product::from_record(ProductKind::Clothing, &shirt).unwrap();
        assert_eq!(as_generic.base(), as_clothing.base());
        assert_ne!(as_generic, as_clothing);
    }

    #[test]
    fn test_set_write_off_date() {
        let mut product = generic(json!({"name": "Product A", "date_of_receipt": "10.04.2025", "count": 5})).unwrap();
        product.set_write_off_date("15.04.2025").unwrap();
        assert_eq!(product.formatted_date_of_write_off(), "15.04.2025");

        // Overwrites
        product.set_write_off_date("10.04.2025").unwrap();
        assert_eq!(product.formatted_date_of_write_off(), "10.04.2025");
    }

    #[test]
    fn test_set_write_off_date_rejects_bad_input() {
        let mut product = generic(json!({"name": "Product A", "date_of_receipt": "10.04.2025", "count": 5})).unwrap();
        let before = product.clone();

        let err = product.set_write_off_date("01.01.2020").unwrap_err();
        assert!(matches!(err, ValidationError::WriteOffBeforeReceipt { .. }));
        let err = product.set_write_off_date("invalid_date").unwrap_err();
        assert_eq!(err, ValidationError::InvalidWriteOffDate("invalid_date".to_string()));

        assert_eq!(product, before);
    }

    #[test]
    fn test_to_record_emits_only_kind_fields() {
        let mut product = Product::from_record(ProductKind::Furniture, &record(table())).unwrap();
        product.set_write_off_date("01.05.2025").unwrap();
        let out = product.to_record();
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["name", "date_of_receipt", "count", "date_of_write_off", "material", "dimensions", "weight"]
        );
        assert_eq!(out["weight"], json!(20));

        let generic = Product::from_record(ProductKind::Generic, &record(shirt())).unwrap();
        let out = generic.to_record();
        assert!(!out.contains_key("size"));
        assert!(!out.contains_key("date_of_write_off"));
        assert_eq!(Product::from_record(ProductKind::Generic, &out).unwrap(), generic);
    }
}
