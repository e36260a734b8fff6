use common::views::InvoiceRow;
use yew::{html, Component, Context, Html, Properties};

const COLUMNS: [&str; 8] = [
    "Customer Name",
    "Serial Number",
    "Product Name",
    "Quantity",
    "Tax",
    "Total Amount",
    "Date",
    "Phone Number",
];

#[derive(Properties, PartialEq)]
pub struct InvoicesTableProps {
    pub rows: Vec<InvoiceRow>,
}

/// One row per product line of every customer.
pub struct InvoicesTable;

impl Component for InvoicesTable {
    type Message = ();
    type Properties = InvoicesTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        InvoicesTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let rows = &ctx.props().rows;
        if rows.is_empty() {
            return html! { <p class="no-data">{"No invoice data available"}</p> };
        }

        html! {
            <table>
                <thead>
                    <tr>{ for COLUMNS.iter().map(|col| html! { <th>{ *col }</th> }) }</tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr>
                            <td>{ row.customer_name.clone() }</td>
                            <td>{ row.serial_number.clone() }</td>
                            <td>{ row.product_name.clone() }</td>
                            <td>{ row.quantity.clone() }</td>
                            <td>{ row.tax.clone() }</td>
                            <td>{ row.total_amount.clone() }</td>
                            <td>{ row.date.clone() }</td>
                            <td>{ row.phone_number.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    }
}
