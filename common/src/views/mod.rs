//! Tabular views derived from a document's extraction data.
//!
//! Every projection is a pure function of its input: it never mutates the
//! document, never fails, and yields empty collections for empty data.

pub mod customers;
pub mod invoices;
pub mod numeric;
pub mod products;

use crate::model::document::DocumentRecord;
pub use customers::{customer_rows, CustomerRow};
pub use invoices::{invoice_rows, InvoiceRow};
pub use products::{product_aggregates, ProductAggregate};

/// The three views of one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedViews {
    pub invoices: Vec<InvoiceRow>,
    pub customers: Vec<CustomerRow>,
    pub products: Vec<ProductAggregate>,
}

/// Projects all three views; `None` yields empty views.
pub fn project(document: Option<&DocumentRecord>) -> ProjectedViews {
    match document {
        Some(document) => ProjectedViews {
            invoices: invoice_rows(&document.data),
            customers: customer_rows(&document.data),
            products: product_aggregates(&document.data),
        },
        None => ProjectedViews::default(),
    }
}
