//! Broadcast edit of a product aggregate.
//!
//! Editing one row of the products view rewrites every line item carrying
//! that product name, in every customer, with the same values. Per-customer
//! differences are collapsed rather than redistributed.

use crate::model::extraction::{ExtractionData, Shape};
use crate::views::numeric::to_json_number;
use crate::views::ProductAggregate;
use serde::{Deserialize, Serialize};

/// Values entered in the product edit form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEdit {
    pub total_quantity: f64,
    pub unit_price: f64,
    pub total_tax: f64,
}

impl ProductEdit {
    /// Starting values for editing `aggregate`. A missing unit price starts
    /// at zero.
    pub fn from_aggregate(aggregate: &ProductAggregate) -> Self {
        Self {
            total_quantity: aggregate.total_quantity,
            unit_price: aggregate.unit_price.unwrap_or(0.0),
            total_tax: aggregate.total_tax,
        }
    }

    /// Amount written to each matching line item.
    pub fn line_amount(&self) -> f64 {
        self.total_quantity * self.unit_price
    }

    /// Live preview shown while editing.
    pub fn price_with_tax(&self) -> f64 {
        self.line_amount() + self.total_tax
    }
}

/// Returns a copy of `data` with the edit applied to every line item named
/// `product_name`.
///
/// For each match the quantity and tax become the edited totals and the
/// customer's `Total Amount` entry at the line item's position becomes
/// `total_quantity * unit_price`. Each field is written only where the
/// customer's record holds it as a sequence; scalar, `null` or missing fields
/// are left untouched.
pub fn apply_product_edit(
    data: &ExtractionData,
    product_name: &str,
    edit: &ProductEdit,
) -> ExtractionData {
    let mut updated = data.clone();
    let quantity = to_json_number(edit.total_quantity);
    let tax = to_json_number(edit.total_tax);
    let amount = to_json_number(edit.line_amount());

    for customer in &mut updated.customers {
        let details = &mut customer.details;
        let writes_quantity = details.line_layout.quantities == Shape::Sequence;
        let writes_tax = details.line_layout.taxes == Shape::Sequence;

        for (position, item) in details.line_items.iter_mut().enumerate() {
            if item.product_name != product_name {
                continue;
            }
            if writes_quantity {
                item.quantity = Some(quantity.clone());
            }
            if writes_tax {
                item.tax = Some(tax.clone());
            }
            details.total_amounts.set(position, amount.clone());
        }
    }

    updated
}
