/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Name and SKU of an agreement product
pub struct ProductSummary {
    /// Legal name of the product
    pub name: String,
    /// Part number (SKU)
    pub part_number: String,
}

/// Products of an `AgreementProductCollection`, renderable as a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTable {
    products: Vec<ProductSummary>,
}

impl ProductTable {
    /// Extracts `ItemLegalName` / `PartNumber` from the collection's `Items`
    ///
    /// Items without a product name or part number are skipped.
    #[must_use]
    pub fn from_collection(collection: &Value) -> Self {
        let products = collection
            .get("Items")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(product_summary).collect())
            .unwrap_or_default();
        Self { products }
    }

    /// Summaries in response order
    #[must_use]
    pub fn products(&self) -> &[ProductSummary] {
        &self.products
    }

    /// Number of products
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether no product was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn product_summary(item: &Value) -> Option<ProductSummary> {
    let product = item.get("ProductVariant")?.get("Product")?;
    Some(ProductSummary {
        name: product.get("ItemLegalName")?.as_str()?.to_string(),
        part_number: product.get("PartNumber")?.as_str()?.to_string(),
    })
}

/// Keys of the `ProductFamilies` facet of an `AgreementProductCollection`
#[must_use]
pub fn product_families(collection: &Value) -> Vec<String> {
    collection
        .get("ProductFamilies")
        .and_then(Value::as_array)
        .map(|families| {
            families
                .iter()
                .filter_map(|f| f.get("Key").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl std::fmt::Display for ProductTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("PRODUCT NAME"),
            Cell::new("PART NUMBER"),
        ]));

        for product in &self.products {
            table.add_row(Row::new(vec![
                Cell::new(&product.name),
                Cell::new(&product.part_number),
            ]));
        }

        write!(f, "{}", table)
    }
}
