//! Products table with the in-place edit form.
//!
//! A row enters edit mode from its action button. The form holds a
//! `ProductEdit` seeded from the aggregate; saving hands the product name and
//! the edit to the parent, which runs the reconciler and persists the result.

mod messages;
mod view;

pub use messages::{EditField, Msg};

use common::edit::ProductEdit;
use common::views::ProductAggregate;
use yew::{Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ProductsTableProps {
    pub products: Vec<ProductAggregate>,
    /// Receives `(product name, edit)` when the user saves.
    pub on_save: Callback<(String, ProductEdit)>,
}

pub struct ProductsTable {
    /// Name of the product being edited and the form values.
    editing: Option<(String, ProductEdit)>,
}

impl Component for ProductsTable {
    type Message = Msg;
    type Properties = ProductsTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { editing: None }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartEdit(name) => {
                let edit = ctx
                    .props()
                    .products
                    .iter()
                    .find(|product| product.name == name)
                    .map(ProductEdit::from_aggregate);
                self.editing = edit.map(|edit| (name, edit));
                true
            }
            Msg::SetField(field, value) => {
                let Some((_, edit)) = self.editing.as_mut() else {
                    return false;
                };
                match field {
                    EditField::Quantity => edit.total_quantity = value,
                    EditField::UnitPrice => edit.unit_price = value,
                    EditField::Tax => edit.total_tax = value,
                }
                true
            }
            Msg::Save => match self.editing.take() {
                Some(saved) => {
                    ctx.props().on_save.emit(saved);
                    true
                }
                None => false,
            },
            Msg::Cancel => self.editing.take().is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
