#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditField {
    Quantity,
    UnitPrice,
    Tax,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    StartEdit(String),
    SetField(EditField, f64),
    Save,
    Cancel,
}
