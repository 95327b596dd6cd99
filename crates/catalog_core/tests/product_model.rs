use catalog_core::Product;
use serde_json::json;

#[test]
fn persisted_product_serializes_all_fields() {
    let product = Product::with_id(1, "Widget", 9.99);

    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value, json!({ "id": 1, "name": "Widget", "price": 9.99 }));
}

#[test]
fn unpersisted_product_omits_id() {
    let product = Product::new("Widget", 9.99);

    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value, json!({ "name": "Widget", "price": 9.99 }));
}

#[test]
fn deserializing_without_id_yields_unpersisted_product() {
    let product: Product = serde_json::from_str(r#"{"name":"Gadget","price":2.5}"#).unwrap();

    assert_eq!(product, Product::new("Gadget", 2.5));
    assert!(!product.is_persisted());
}
