use cloudiq_client::presentation::product::{ProductTable, product_families};
use serde_json::json;

#[test]
fn test_product_table_from_agreement_products() {
    let collection = json!({
        "Items": [
            {"ProductVariant": {"Product": {"ItemLegalName": "Microsoft 365 Business Basic", "PartNumber": "CFQ7TTC0LH18:0001"}}},
            {"ProductVariant": {"Product": {"ItemLegalName": "Microsoft 365 Business Standard", "PartNumber": "CFQ7TTC0LDPB:0001"}}},
            {"ProductVariant": {}}
        ],
        "ProductFamilies": [{"Key": "Microsoft 365", "Count": 2}]
    });

    let table = ProductTable::from_collection(&collection);
    assert_eq!(table.len(), 2);
    assert_eq!(table.products()[0].name, "Microsoft 365 Business Basic");
    assert_eq!(product_families(&collection), vec!["Microsoft 365"]);

    let rendered = format!("{table}");
    assert!(rendered.contains("PRODUCT NAME"));
    assert!(rendered.contains("CFQ7TTC0LDPB:0001"));
}

#[test]
fn test_empty_collection_renders_header_only() {
    let table = ProductTable::from_collection(&json!({"Items": []}));
    assert!(table.is_empty());
    assert!(table.to_string().contains("PART NUMBER"));
    assert!(product_families(&json!({})).is_empty());
}
