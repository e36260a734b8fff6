//! Cross-customer product rollup.
//!
//! Line items are grouped by their exact product name. Aggregates keep the
//! order in which each name is first seen while walking customers in
//! document order.

use super::numeric::{coerce, coerce_amount, coerce_tax};
use crate::model::extraction::{ExtractionData, LineItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAggregate {
    pub name: String,
    pub total_quantity: f64,
    /// Accumulates the owning customer's first `Total Amount` once per
    /// occurrence.
    pub total_amount: f64,
    pub total_tax: f64,
    /// Customer keys holding this product, each listed once.
    pub customers: Vec<String>,
    /// `total_amount / total_quantity`, `None` when the quantity is zero.
    pub unit_price: Option<f64>,
    pub price_with_tax: f64,
}

pub fn product_aggregates(data: &ExtractionData) -> Vec<ProductAggregate> {
    let mut aggregates: Vec<ProductAggregate> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for customer in &data.customers {
        let amount = coerce_amount(customer.details.total_amounts.first());

        for item in &customer.details.line_items {
            let position = *positions
                .entry(item.product_name.as_str())
                .or_insert_with(|| {
                    aggregates.push(ProductAggregate::empty(&item.product_name));
                    aggregates.len() - 1
                });

            let aggregate = &mut aggregates[position];
            aggregate.total_quantity += line_quantity(item);
            aggregate.total_amount += amount;
            aggregate.total_tax += coerce_tax(item.tax.as_ref());
            if !aggregate.customers.contains(&customer.name) {
                aggregate.customers.push(customer.name.clone());
            }
        }
    }

    for aggregate in &mut aggregates {
        aggregate.unit_price = if aggregate.total_quantity == 0.0 {
            None
        } else {
            Some(aggregate.total_amount / aggregate.total_quantity)
        };
        aggregate.price_with_tax = aggregate.total_amount + aggregate.total_tax;
    }

    aggregates
}

// A line item without a recorded quantity counts as a single unit.
fn line_quantity(item: &LineItem) -> f64 {
    match &item.quantity {
        None | Some(Value::Null) => 1.0,
        quantity => coerce(quantity.as_ref()),
    }
}

impl ProductAggregate {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_quantity: 0.0,
            total_amount: 0.0,
            total_tax: 0.0,
            customers: Vec::new(),
            unit_price: None,
            price_with_tax: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(raw: Value) -> ExtractionData {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn groups_line_items_across_customers() {
        let products = product_aggregates(&data(json!({
            "A": {
                "Product Name": ["Widget", "Bolt"],
                "Quantity": [2, 10],
                "Tax": [1, "0.5 USD"],
                "Total Amount": ["1,020"],
            },
            "B": {
                "Product Name": ["Widget"],
                "Quantity": ["3"],
                "Tax": [1.5],
                "Total Amount": [30],
            },
        })));

        assert_eq!(products.len(), 2);
        let widget = &products[0];
        assert_eq!(widget.name, "Widget");
        assert_eq!(widget.total_quantity, 5.0);
        assert_eq!(widget.total_amount, 1050.0);
        assert_eq!(widget.total_tax, 2.5);
        assert_eq!(widget.customers, vec!["A", "B"]);
        assert_eq!(widget.price_with_tax, 1052.5);
        assert_eq!(products[1].name, "Bolt");
        assert_eq!(products[1].total_tax, 0.5);
    }

    #[test]
    fn unit_price_divides_amount_by_quantity() {
        let products = product_aggregates(&data(json!({
            "A": { "Product Name": ["Lamp"], "Quantity": [4], "Tax": [7], "Total Amount": ["100"] },
        })));

        assert_eq!(products[0].unit_price, Some(25.0));
        assert_eq!(products[0].price_with_tax, 107.0);
    }

    #[test]
    fn zero_quantity_has_no_unit_price() {
        let products = product_aggregates(&data(json!({
            "A": { "Product Name": ["Lamp"], "Quantity": [0], "Total Amount": ["100"] },
        })));

        assert_eq!(products[0].total_quantity, 0.0);
        assert_eq!(products[0].unit_price, None);
    }

    #[test]
    fn grouping_is_case_sensitive_and_untrimmed() {
        let products = product_aggregates(&data(json!({
            "A": { "Product Name": ["Widget", "widget", "Widget "] },
        })));

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "widget", "Widget "]);
    }

    #[test]
    fn repeated_line_items_list_the_customer_once() {
        let products = product_aggregates(&data(json!({
            "A": { "Product Name": ["Nut", "Nut"], "Total Amount": ["8"] },
        })));

        let nut = &products[0];
        assert_eq!(nut.customers, vec!["A"]);
        assert_eq!(nut.total_quantity, 2.0);
        assert_eq!(nut.total_amount, 16.0);
        assert_eq!(nut.unit_price, Some(8.0));
    }

    #[test]
    fn present_quantities_count_as_their_value() {
        let products = product_aggregates(&data(json!({
            "A": { "Product Name": ["Cup", "Cup", "Cup", "Cup"], "Quantity": [0, "", null] },
        })));

        // 0 + "" + null (one unit) + missing (one unit)
        assert_eq!(products[0].total_quantity, 2.0);
    }
}
