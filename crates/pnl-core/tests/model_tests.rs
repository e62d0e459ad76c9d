use chrono::{TimeZone, Utc};
use pnl_core::model::{
    ApiCredentials, Expense, ExpensePeriod, Order, OrderItem, Product, ProductVariation,
    VariationAttribute,
};
use proptest::prelude::*;

#[test]
fn test_unset_id_is_omitted_from_json() {
    let product = Product::new("Mug", 12.5).with_sku("MUG-1");
    let json = serde_json::to_value(&product).unwrap();

    assert!(json.get("id").is_none());
    assert_eq!(json["sku"], "MUG-1");
}

#[test]
fn test_partial_json_fills_defaults() {
    let product: Product = serde_json::from_str(r#"{"name":"Tee","price":20.0}"#).unwrap();
    assert_eq!(product.name, "Tee");
    assert!(product.variations.is_empty());
    assert!(!product.is_variable());
}

#[test]
fn test_variation_attribute_lookup() {
    let mut variation = ProductVariation::new(7, "Tee - Large", 22.0);
    variation.attributes.push(VariationAttribute {
        name: "Size".to_string(),
        option: "Large".to_string(),
    });

    assert_eq!(variation.attribute("Size"), Some("Large"));
    assert_eq!(variation.attribute("Colour"), None);
}

#[test]
fn test_order_item_count() {
    let mut order = Order::new("1001", "2024-03-01T10:00:00", "completed");
    order.line_items = vec![
        OrderItem {
            id: 1,
            product_id: 10,
            quantity: 2,
            ..OrderItem::default()
        },
        OrderItem {
            id: 2,
            product_id: 11,
            quantity: 3,
            ..OrderItem::default()
        },
    ];
    assert_eq!(order.item_count(), 5);
}

#[test]
fn test_expense_period_wire_name() {
    let mut expense = Expense::new(
        Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
        "Rent",
        1200.0,
        "January rent",
    );
    expense.period = Some(ExpensePeriod::Monthly);

    let json = serde_json::to_value(&expense).unwrap();
    assert_eq!(json["period"], "monthly");
}

proptest! {
    #[test]
    fn credentials_debug_never_leaks_secret(secret in "cs_[a-zA-Z0-9]{8,24}") {
        let creds = ApiCredentials::new("https://shop.example", "ck_public", secret.clone());
        let debug = format!("{:?}", creds);
        prop_assert!(!debug.contains(&secret));
        prop_assert!(debug.contains("ck_public"));
    }
}
