use super::messages::{Msg, Tab};
use super::state::App;
use crate::components::customers::CustomersTable;
use crate::components::invoices::InvoicesTable;
use crate::components::products::ProductsTable;
use common::edit::ProductEdit;
use common::views::project;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();
    html! {
        <div class="app-container">
            { upload_section(app, link) }
            { tab_navigation(app, link) }
            { active_tab(app, link) }
        </div>
    }
}

fn upload_section(app: &App, link: &Scope<App>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                class="file-input"
                accept={app.settings.accept_attribute()}
                ref={app.file_input_ref.clone()}
                {onchange}
            />
            <button
                class="upload-button"
                disabled={app.loading}
                onclick={link.callback(|_| Msg::Upload)}
            >
                { if app.loading { "Uploading..." } else { "Upload" } }
            </button>
            { document_section(app, link) }
        </div>
    }
}

fn document_section(app: &App, link: &Scope<App>) -> Html {
    let documents = app.cache.documents();
    if documents.is_empty() {
        return html! {};
    }
    let current_id = app.cache.current().map(|d| d.id.clone()).unwrap_or_default();
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectDocument(select.value())
    });

    html! {
        <div class="document-section">
            <select class="document-select" {onchange}>
                <option value="" selected={current_id.is_empty()}>{"Select a document"}</option>
                { for documents.iter().map(|doc| html! {
                    <option value={doc.id.clone()} selected={doc.id == current_id}>
                        { doc.label() }
                    </option>
                }) }
            </select>
            <div class="document-list">
                { for documents.iter().map(|doc| {
                    let id = doc.id.clone();
                    html! {
                        <div class="document-item">
                            <span>{ doc.label() }</span>
                            <button
                                class="delete-button"
                                onclick={link.callback(move |_| Msg::DeleteDocument(id.clone()))}
                            >
                                {"Delete"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn tab_navigation(app: &App, link: &Scope<App>) -> Html {
    html! {
        <div class="tab-navigation">
            { for Tab::ALL.iter().map(|&tab| html! {
                <button
                    class={classes!("tab-button", (app.active_tab == tab).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetTab(tab))}
                >
                    { tab.label() }
                </button>
            }) }
        </div>
    }
}

fn active_tab(app: &App, link: &Scope<App>) -> Html {
    let views = project(app.cache.current());
    match app.active_tab {
        Tab::Invoices => html! { <InvoicesTable rows={views.invoices} /> },
        Tab::Customers => html! { <CustomersTable rows={views.customers} /> },
        Tab::Products => html! {
            <ProductsTable
                products={views.products}
                on_save={link.callback(|(product, edit): (String, ProductEdit)| Msg::SaveProduct(product, edit))}
            />
        },
    }
}
