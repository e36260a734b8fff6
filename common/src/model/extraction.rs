//! Typed form of the payload returned by the extraction service.
//!
//! On the wire the payload maps each customer name to a detail record whose
//! fields are parallel value sequences (`Product Name[i]`, `Quantity[i]` and
//! `Tax[i]` describe one line item). Decoding folds those parallel sequences
//! into explicit [`LineItem`] records so nothing else in the workspace has to
//! match positions across columns. Encoding writes the field-keyed form back,
//! so the store keeps the same shape the extraction service produced.
//!
//! Decoding never fails. A payload or detail record that is not an object
//! reads as empty, a scalar where a sequence is expected reads as a
//! one-element sequence and `null` as an empty one. Each field remembers the
//! [`Shape`] it arrived in, and `Quantity`/`Tax` cells past the last product
//! name are kept in the [`LineLayout`], so an unedited record encodes to the
//! value it was decoded from. Fields the model does not interpret are kept in
//! [`CustomerDetails::other`] and written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SERIAL_NUMBER: &str = "Serial Number";
pub const PRODUCT_NAME: &str = "Product Name";
pub const QUANTITY: &str = "Quantity";
pub const TAX: &str = "Tax";
pub const TOTAL_AMOUNT: &str = "Total Amount";
pub const DATE: &str = "Date";
pub const PHONE_NUMBER: &str = "Customer Phone number";

/// Extraction result for one uploaded document, customers in payload order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Map<String, Value>")]
pub struct ExtractionData {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// The customer key as produced by the extraction service.
    pub name: String,
    pub details: CustomerDetails,
}

/// How a field appeared in the detail record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Absent,
    Null,
    Scalar,
    Sequence,
}

/// An invoice-level field: its cells plus the shape it arrived in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub cells: Vec<Value>,
    pub shape: Shape,
}

impl Column {
    pub fn sequence(cells: Vec<Value>) -> Self {
        Self {
            cells,
            shape: Shape::Sequence,
        }
    }

    pub fn first(&self) -> Option<&Value> {
        self.cells.first()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_sequence(&self) -> bool {
        self.shape == Shape::Sequence
    }

    /// Writes cell `index`, padding with `null`. Only sequences are written;
    /// returns whether the cell was set.
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        if !self.is_sequence() {
            return false;
        }
        if self.cells.len() <= index {
            self.cells.resize(index + 1, Value::Null);
        }
        self.cells[index] = value;
        true
    }

    fn decode(value: Option<Value>) -> Self {
        match value {
            None => Self::default(),
            Some(Value::Null) => Self {
                cells: Vec::new(),
                shape: Shape::Null,
            },
            Some(Value::Array(cells)) => Self::sequence(cells),
            Some(scalar) => Self {
                cells: vec![scalar],
                shape: Shape::Scalar,
            },
        }
    }

    fn encode(&self) -> Option<Value> {
        encode_cells(self.shape, self.cells.clone())
    }
}

/// One customer's detail record.
///
/// `serial_numbers`, `total_amounts`, `dates` and `phone_numbers` are
/// invoice-level columns; projections only read their first entry, which
/// means one invoice per customer key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerDetails {
    pub serial_numbers: Column,
    pub line_items: Vec<LineItem>,
    pub line_layout: LineLayout,
    pub total_amounts: Column,
    pub dates: Column,
    pub phone_numbers: Column,
    /// Fields not interpreted by the model, in payload order.
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Grouping key for product aggregates. Compared exactly, no trimming
    /// or case folding.
    pub product_name: String,
    /// `None` when the record carries no quantity for this line item.
    pub quantity: Option<Value>,
    /// `None` when the record carries no tax for this line item.
    pub tax: Option<Value>,
}

/// Wire layout of the `Product Name`, `Quantity` and `Tax` columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLayout {
    pub product_names: Shape,
    pub quantities: Shape,
    pub taxes: Shape,
    /// Quantity cells past the last product name.
    pub extra_quantities: Vec<Value>,
    /// Tax cells past the last product name.
    pub extra_taxes: Vec<Value>,
}

impl ExtractionData {
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerDetails {
    /// Decodes a detail record from its wire form.
    pub fn from_value(value: Value) -> Self {
        let mut fields = match value {
            Value::Object(map) => map,
            _ => return Self::default(),
        };

        let names = Column::decode(fields.shift_remove(PRODUCT_NAME));
        let mut quantities = Column::decode(fields.shift_remove(QUANTITY));
        let mut taxes = Column::decode(fields.shift_remove(TAX));

        let count = names.len();
        let line_layout = LineLayout {
            product_names: names.shape,
            quantities: quantities.shape,
            taxes: taxes.shape,
            extra_quantities: split_extra(&mut quantities.cells, count),
            extra_taxes: split_extra(&mut taxes.cells, count),
        };
        let line_items = names
            .cells
            .into_iter()
            .enumerate()
            .map(|(index, name)| LineItem {
                product_name: product_name_text(name),
                quantity: quantities.cells.get(index).cloned(),
                tax: taxes.cells.get(index).cloned(),
            })
            .collect();

        Self {
            serial_numbers: Column::decode(fields.shift_remove(SERIAL_NUMBER)),
            line_items,
            line_layout,
            total_amounts: Column::decode(fields.shift_remove(TOTAL_AMOUNT)),
            dates: Column::decode(fields.shift_remove(DATE)),
            phone_numbers: Column::decode(fields.shift_remove(PHONE_NUMBER)),
            other: fields,
        }
    }

    /// Encodes the record back into the field-keyed wire form.
    pub fn to_value(&self) -> Value {
        let mut fields = Map::new();
        let layout = &self.line_layout;

        put(&mut fields, SERIAL_NUMBER, self.serial_numbers.encode());
        let names = self
            .line_items
            .iter()
            .map(|item| Value::String(item.product_name.clone()))
            .collect();
        put(&mut fields, PRODUCT_NAME, encode_cells(layout.product_names, names));
        put(
            &mut fields,
            QUANTITY,
            encode_line_column(
                layout.quantities,
                self.line_items.iter().map(|item| &item.quantity),
                &layout.extra_quantities,
            ),
        );
        put(
            &mut fields,
            TAX,
            encode_line_column(
                layout.taxes,
                self.line_items.iter().map(|item| &item.tax),
                &layout.extra_taxes,
            ),
        );
        put(&mut fields, TOTAL_AMOUNT, self.total_amounts.encode());
        put(&mut fields, DATE, self.dates.encode());
        put(&mut fields, PHONE_NUMBER, self.phone_numbers.encode());

        for (key, value) in &self.other {
            fields.insert(key.clone(), value.clone());
        }
        Value::Object(fields)
    }

    /// Every `Tax` cell of the record, including those past the last product
    /// name.
    pub fn tax_cells(&self) -> impl Iterator<Item = &Value> {
        self.line_items
            .iter()
            .filter_map(|item| item.tax.as_ref())
            .chain(&self.line_layout.extra_taxes)
    }
}

impl From<Value> for ExtractionData {
    fn from(raw: Value) -> Self {
        match raw {
            Value::Object(map) => map.into(),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for ExtractionData {
    fn from(raw: Map<String, Value>) -> Self {
        let customers = raw
            .into_iter()
            .map(|(name, details)| Customer {
                name,
                details: CustomerDetails::from_value(details),
            })
            .collect();
        Self { customers }
    }
}

impl From<ExtractionData> for Map<String, Value> {
    fn from(data: ExtractionData) -> Self {
        data.customers
            .into_iter()
            .map(|customer| (customer.name, customer.details.to_value()))
            .collect()
    }
}

fn split_extra(cells: &mut Vec<Value>, count: usize) -> Vec<Value> {
    if cells.len() > count {
        cells.split_off(count)
    } else {
        Vec::new()
    }
}

fn put(fields: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        fields.insert(key.to_string(), value);
    }
}

// Cells written to a field that arrived in another shape (or not at all) are
// written as a sequence.
fn encode_cells(shape: Shape, mut cells: Vec<Value>) -> Option<Value> {
    match shape {
        Shape::Absent if cells.is_empty() => None,
        Shape::Null if cells.is_empty() => Some(Value::Null),
        Shape::Scalar if cells.len() == 1 => cells.pop(),
        _ => Some(Value::Array(cells)),
    }
}

// Line items without a cell only occur after the last present one, unless an
// edit filled a later one; the gap is written as `null`.
fn encode_line_column<'a>(
    shape: Shape,
    cells: impl Iterator<Item = &'a Option<Value>>,
    extra: &[Value],
) -> Option<Value> {
    let mut column: Vec<Option<Value>> = cells.cloned().collect();
    while matches!(column.last(), Some(None)) {
        column.pop();
    }
    let cells = column
        .into_iter()
        .map(|cell| cell.unwrap_or(Value::Null))
        .chain(extra.iter().cloned())
        .collect();
    encode_cells(shape, cells)
}

fn product_name_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
