use common::edit::{apply_product_edit, ProductEdit};
use common::model::document::DocumentRecord;
use common::model::extraction::ExtractionData;
use common::views::numeric::coerce;
use common::views::{customer_rows, invoice_rows, product_aggregates, project};
use serde_json::{json, Value};

fn document(data: Value) -> DocumentRecord {
    serde_json::from_value(json!({
        "id": "doc-1",
        "name": "batch.xlsx",
        "uploadDate": "1/5/2024, 9:30:00 AM",
        "data": data,
    }))
    .unwrap()
}

fn sample() -> DocumentRecord {
    document(json!({
        "Acme Corp": {
            "Serial Number": ["INV-001"],
            "Product Name": ["Widget", "Bolt", "Widget"],
            "Quantity": [2, "10", 1],
            "Tax": ["1.5 USD", 0.25, "1,000 EUR"],
            "Total Amount": ["1,250.00"],
            "Date": ["2024-01-05"],
            "Customer Phone number": ["+1 555 0100"],
        },
        "Globex": {
            "Serial Number": ["INV-002"],
            "Product Name": ["Bolt"],
            "Quantity": [5],
            "Tax": [2],
            "Total Amount": [40, "n/a", "10"],
            "Date": ["2024-01-06"],
        },
    }))
}

#[test]
fn absent_or_empty_documents_project_to_empty_views() {
    let empty = project(None);
    assert!(empty.invoices.is_empty());
    assert!(empty.customers.is_empty());
    assert!(empty.products.is_empty());

    for data in [json!({}), json!(null)] {
        let views = project(Some(&document(data)));
        assert!(views.invoices.is_empty());
        assert!(views.customers.is_empty());
        assert!(views.products.is_empty());
    }
}

#[test]
fn invoice_view_has_one_row_per_product_name() {
    let record = sample();
    let rows = invoice_rows(&record.data);

    let acme = rows.iter().filter(|r| r.customer_name == "Acme Corp").count();
    let globex = rows.iter().filter(|r| r.customer_name == "Globex").count();
    assert_eq!(acme, 3);
    assert_eq!(globex, 1);
    assert_eq!(rows[3].phone_number, "N/A");
}

#[test]
fn customer_purchase_amount_sums_total_amounts() {
    let record = sample();
    let rows = customer_rows(&record.data);

    let globex = rows.iter().find(|r| r.name == "Globex").unwrap();
    let expected: f64 = record
        .data
        .customers
        .iter()
        .find(|c| c.name == "Globex")
        .unwrap()
        .details
        .total_amounts
        .cells
        .iter()
        .map(|amount| coerce(Some(amount)))
        .sum();
    assert_eq!(globex.total_purchase_amount, expected);
    assert_eq!(globex.total_purchase_amount, 50.0);
    assert_eq!(globex.invoice_count, 1);
}

#[test]
fn tax_suffixes_contribute_their_number() {
    let record = sample();

    let acme = &customer_rows(&record.data)[0];
    assert_eq!(acme.tax_paid, 1.5 + 0.25 + 1000.0);

    let widget = product_aggregates(&record.data)
        .into_iter()
        .find(|p| p.name == "Widget")
        .unwrap();
    assert_eq!(widget.total_tax, 1001.5);
    assert_eq!(widget.total_quantity, 3.0);
    assert_eq!(widget.total_amount, 2500.0);
    assert_eq!(widget.customers, vec!["Acme Corp"]);
}

#[test]
fn projecting_twice_gives_identical_views() {
    let record = sample();
    assert_eq!(project(Some(&record)), project(Some(&record)));
}

#[test]
fn cross_customer_widget_edit() {
    let data: ExtractionData = serde_json::from_value(json!({
        "A": { "Product Name": ["Widget"], "Quantity": [2], "Tax": [1], "Total Amount": [20] },
        "B": { "Product Name": ["Widget"], "Quantity": [3], "Tax": [1.5], "Total Amount": [30] },
    }))
    .unwrap();
    let edit = ProductEdit { total_quantity: 5.0, unit_price: 10.0, total_tax: 2.0 };

    let updated = apply_product_edit(&data, "Widget", &edit);
    let wire = serde_json::to_value(&updated).unwrap();

    for customer in ["A", "B"] {
        assert_eq!(wire[customer]["Quantity"], json!([5]));
        assert_eq!(wire[customer]["Tax"], json!([2]));
        assert_eq!(wire[customer]["Total Amount"], json!([50]));
    }

    let widget = &product_aggregates(&updated)[0];
    assert_eq!(widget.total_quantity, 10.0);
    assert_eq!(widget.total_amount, 100.0);
    assert_eq!(widget.unit_price, Some(10.0));
}

#[test]
fn unit_price_and_price_with_tax() {
    let data: ExtractionData = serde_json::from_value(json!({
        "A": { "Product Name": ["Lamp"], "Quantity": [4], "Tax": ["3 USD"], "Total Amount": ["100"] },
    }))
    .unwrap();

    let lamp = &product_aggregates(&data)[0];
    assert_eq!(lamp.unit_price, Some(25.0));
    assert_eq!(lamp.price_with_tax, 103.0);
}

#[test]
fn edit_skips_fields_that_are_not_sequences() {
    let raw = json!({
        "A": { "Product Name": ["Widget"], "Quantity": "2", "Tax": [1], "Total Amount": "150" },
        "B": { "Product Name": ["Widget"], "Quantity": [3], "Total Amount": [30] },
    });
    let data: ExtractionData = serde_json::from_value(raw).unwrap();
    let edit = ProductEdit { total_quantity: 2.0, unit_price: 3.0, total_tax: 4.0 };

    let wire = serde_json::to_value(apply_product_edit(&data, "Widget", &edit)).unwrap();

    assert_eq!(wire["A"]["Quantity"], json!("2"));
    assert_eq!(wire["A"]["Tax"], json!([4]));
    assert_eq!(wire["A"]["Total Amount"], json!("150"));
    assert_eq!(wire["B"]["Quantity"], json!([2]));
    assert!(wire["B"].get("Tax").is_none());
    assert_eq!(wire["B"]["Total Amount"], json!([6]));
}

#[test]
fn unedited_data_keeps_its_wire_form() {
    let raw = json!({
        "A": { "Product Name": ["W"], "Quantity": [2, 3], "Tax": [1, 2] },
        "B": { "Tax": [5], "Total Amount": [10], "Date": "2024-01-05" },
    });
    let data: ExtractionData = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(serde_json::to_value(&data).unwrap(), raw);
    let b = customer_rows(&data).into_iter().find(|r| r.name == "B").unwrap();
    assert_eq!(b.tax_paid, 5.0);
}
