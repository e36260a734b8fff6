use crate::helpers::fixed2;
use common::views::CustomerRow;
use yew::{html, Component, Context, Html, Properties};

const COLUMNS: [&str; 5] = [
    "Customer Name",
    "Phone Number",
    "Total Purchase Amount",
    "Invoice Count",
    "Total Tax Paid",
];

#[derive(Properties, PartialEq)]
pub struct CustomersTableProps {
    pub rows: Vec<CustomerRow>,
}

pub struct CustomersTable;

impl Component for CustomersTable {
    type Message = ();
    type Properties = CustomersTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CustomersTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let rows = &ctx.props().rows;
        if rows.is_empty() {
            return html! { <p class="no-data">{"No customer data available"}</p> };
        }

        html! {
            <table>
                <thead>
                    <tr>{ for COLUMNS.iter().map(|col| html! { <th>{ *col }</th> }) }</tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr>
                            <td>{ row.name.clone() }</td>
                            <td>{ row.phone_number.clone() }</td>
                            <td>{ fixed2(row.total_purchase_amount) }</td>
                            <td>{ row.invoice_count.to_string() }</td>
                            <td>{ fixed2(row.tax_paid) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    }
}
