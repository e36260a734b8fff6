use crate::model::extraction::ExtractionData;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NOT_AVAILABLE: &str = "N/A";
const ZERO_AMOUNT: &str = "0.00";

/// One line item rendered as an invoice table row. Invoice-level columns
/// repeat the customer's first serial number, amount, date and phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub customer_name: String,
    pub serial_number: String,
    pub product_name: String,
    pub quantity: String,
    pub tax: String,
    pub total_amount: String,
    pub date: String,
    pub phone_number: String,
}

/// One row per line item, customers in document order.
pub fn invoice_rows(data: &ExtractionData) -> Vec<InvoiceRow> {
    data.customers
        .iter()
        .flat_map(|customer| {
            let details = &customer.details;
            details.line_items.iter().map(move |item| InvoiceRow {
                customer_name: customer.name.clone(),
                serial_number: cell(details.serial_numbers.first(), NOT_AVAILABLE),
                product_name: if item.product_name.is_empty() {
                    NOT_AVAILABLE.to_string()
                } else {
                    item.product_name.clone()
                },
                quantity: cell(item.quantity.as_ref(), NOT_AVAILABLE),
                tax: cell(item.tax.as_ref(), ZERO_AMOUNT),
                total_amount: cell(details.total_amounts.first(), ZERO_AMOUNT),
                date: cell(details.dates.first(), NOT_AVAILABLE),
                phone_number: cell(details.phone_numbers.first(), NOT_AVAILABLE),
            })
        })
        .collect()
}

/// Display text for an extracted value, `fallback` when it is missing.
pub(crate) fn cell(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => fallback.to_string(),
    }
}
