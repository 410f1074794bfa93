use serde::{Deserialize, Serialize};
use super::SupplierId;

pub type ProductId = i64;

/// Represents a product in the catalog.
///
/// `supplier_name` is display data only. It is filled in from the supplier
/// directory every time the product leaves the store and is never treated as
/// authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub available: bool,
    pub supplier_id: Option<SupplierId>,
    #[serde(default)]
    pub supplier_name: Option<String>,
}

/// Payload for replacing the mutable fields of an existing product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    pub name: String,
    pub available: bool,
    pub supplier_id: Option<SupplierId>,
}

impl Product {
    /// Creates a new Product with no supplier name resolved yet.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        available: bool,
        supplier_id: Option<SupplierId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            available,
            supplier_id,
            supplier_name: None,
        }
    }

    /// Overwrites `name`, `available` and `supplier_id`. The id is left alone.
    pub fn apply(&mut self, changes: ProductChanges) {
        self.name = changes.name;
        self.available = changes.available;
        self.supplier_id = changes.supplier_id;
    }
}

impl ProductChanges {
    pub fn new(name: impl Into<String>, available: bool, supplier_id: Option<SupplierId>) -> Self {
        Self {
            name: name.into(),
            available,
            supplier_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_keeps_id_and_supplier_name() {
        let mut product = Product::new(4, "Widget", true, Some(1));
        product.supplier_name = Some("Acme".to_string());

        product.apply(ProductChanges::new("Gadget", false, None));

        assert_eq!(product.id, 4);
        assert_eq!(product.name, "Gadget");
        assert!(!product.available);
        assert_eq!(product.supplier_id, None);
        assert_eq!(product.supplier_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_serialized_representation() {
        let mut product = Product::new(1, "Product A", true, Some(1));
        product.supplier_name = Some("Acme".to_string());

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Product A",
                "available": true,
                "supplierId": 1,
                "supplierName": "Acme"
            })
        );
    }

    #[test]
    fn test_deserialize_without_supplier_name() {
        let product: Product = serde_json::from_value(json!({
            "id": 9,
            "name": "Loose",
            "available": false,
            "supplierId": null
        }))
        .unwrap();

        assert_eq!(product, Product::new(9, "Loose", false, None));
    }
}
