use super::invoices::cell;
use super::numeric::{coerce, coerce_tax};
use crate::model::extraction::ExtractionData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub name: String,
    pub phone_number: String,
    /// Sum of every `Total Amount` entry.
    pub total_purchase_amount: f64,
    /// Number of `Serial Number` entries.
    pub invoice_count: usize,
    /// Sum of every `Tax` entry, including entries past the last product.
    pub tax_paid: f64,
}

/// One row per customer key, in document order.
pub fn customer_rows(data: &ExtractionData) -> Vec<CustomerRow> {
    data.customers
        .iter()
        .map(|customer| {
            let details = &customer.details;
            CustomerRow {
                name: customer.name.clone(),
                phone_number: cell(details.phone_numbers.first(), "N/A"),
                total_purchase_amount: total(
                    details.total_amounts.cells.iter().map(|amount| coerce(Some(amount))),
                ),
                invoice_count: details.serial_numbers.len(),
                tax_paid: total(details.tax_cells().map(|tax| coerce_tax(Some(tax)))),
            }
        })
        .collect()
}

// Starts from +0.0 so an empty sum renders as "0.00".
fn total(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |acc, value| acc + value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sums_amounts_and_taxes_per_customer() {
        let data: ExtractionData = serde_json::from_value(json!({
            "Alice": {
                "Serial Number": ["S-1", "S-2"],
                "Product Name": ["Widget", "Gadget"],
                "Tax": ["12.5 USD", 2],
                "Total Amount": ["100", 50.5, "oops"],
                "Customer Phone number": ["555-0100", "555-0199"],
            },
            "Bob": {},
        }))
        .unwrap();

        let rows = customer_rows(&data);
        assert_eq!(rows.len(), 2);

        let alice = &rows[0];
        assert_eq!(alice.phone_number, "555-0100");
        assert_eq!(alice.total_purchase_amount, 150.5);
        assert_eq!(alice.invoice_count, 2);
        assert_eq!(alice.tax_paid, 14.5);

        let bob = &rows[1];
        assert_eq!(bob.phone_number, "N/A");
        assert_eq!(bob.total_purchase_amount, 0.0);
        assert_eq!(bob.invoice_count, 0);
        assert!(bob.total_purchase_amount.is_sign_positive());
        assert!(bob.tax_paid.is_sign_positive());
        assert_eq!(format!("{:.2} {:.2}", bob.total_purchase_amount, bob.tax_paid), "0.00 0.00");
    }

    #[test]
    fn taxes_without_product_names_still_count() {
        let data: ExtractionData = serde_json::from_value(json!({
            "A": { "Tax": [5], "Total Amount": [10] },
            "B": { "Product Name": ["W"], "Tax": ["1 USD", 2] },
            "C": { "Tax": "4" },
        }))
        .unwrap();

        let rows = customer_rows(&data);
        assert_eq!(rows[0].tax_paid, 5.0);
        assert_eq!(rows[0].total_purchase_amount, 10.0);
        assert_eq!(rows[1].tax_paid, 3.0);
        assert_eq!(rows[2].tax_paid, 4.0);
    }
}
