use super::{EditField, Msg, ProductsTable};
use crate::helpers::{fixed2, parse_input_number, plain_number};
use common::edit::ProductEdit;
use common::views::ProductAggregate;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

const COLUMNS: [&str; 7] = [
    "Product Name",
    "Quantity",
    "Unit Price",
    "Total Tax",
    "Price with Tax",
    "Customers",
    "Actions",
];

pub fn view(component: &ProductsTable, ctx: &Context<ProductsTable>) -> Html {
    let products = &ctx.props().products;
    if products.is_empty() {
        return html! { <div class="no-data">{"No product data available"}</div> };
    }
    let link = ctx.link();

    html! {
        <table>
            <thead>
                <tr>{ for COLUMNS.iter().map(|col| html! { <th>{ *col }</th> }) }</tr>
            </thead>
            <tbody>
                { for products.iter().map(|product| match &component.editing {
                    Some((name, edit)) if *name == product.name => edit_row(product, edit, link),
                    _ => display_row(product, link),
                }) }
            </tbody>
        </table>
    }
}

fn display_row(product: &ProductAggregate, link: &Scope<ProductsTable>) -> Html {
    let name = product.name.clone();
    let unit_price = product
        .unit_price
        .map(fixed2)
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <tr>
            <td>{ product.name.clone() }</td>
            <td>{ plain_number(product.total_quantity) }</td>
            <td>{ unit_price }</td>
            <td>{ fixed2(product.total_tax) }</td>
            <td>{ fixed2(product.price_with_tax) }</td>
            <td>{ product.customers.join(", ") }</td>
            <td>
                <button class="action-button" title="Edit"
                    onclick={link.callback(move |_| Msg::StartEdit(name.clone()))}>
                    {"Edit"}
                </button>
            </td>
        </tr>
    }
}

fn edit_row(product: &ProductAggregate, edit: &ProductEdit, link: &Scope<ProductsTable>) -> Html {
    html! {
        <tr>
            <td>{ product.name.clone() }</td>
            <td>{ number_input(edit.total_quantity, EditField::Quantity, link) }</td>
            <td>{ number_input(edit.unit_price, EditField::UnitPrice, link) }</td>
            <td>{ number_input(edit.total_tax, EditField::Tax, link) }</td>
            <td>{ fixed2(edit.price_with_tax()) }</td>
            <td>{ product.customers.join(", ") }</td>
            <td>
                <button class="action-button" onclick={link.callback(|_| Msg::Save)}>{"Save"}</button>
                <button class="action-button" onclick={link.callback(|_| Msg::Cancel)}>{"Cancel"}</button>
            </td>
        </tr>
    }
}

fn number_input(value: f64, field: EditField, link: &Scope<ProductsTable>) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, parse_input_number(input.value()))
    });
    html! {
        <input type="number" value={plain_number(value)} {oninput} />
    }
}
