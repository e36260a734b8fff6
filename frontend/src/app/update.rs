//! Message handling for the root component.
//!
//! Local write results and change-feed snapshots both land in the cache;
//! whichever arrives last wins.

use super::messages::Msg;
use super::state::App;
use crate::gateways::HttpExtractionService;
use crate::helpers::{alert, read_upload_file, show_toast, upload_timestamp};
use common::flows::{delete_document, save_product_edit, upload_document, UploadError};
use common::gateway::GatewayError;
use gloo_console::{error, log};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

pub fn update(app: &mut App, ctx: &Context<App>, msg: Msg) -> bool {
    match msg {
        Msg::SettingsLoaded(settings) => {
            app.settings = settings;
            true
        }
        Msg::DocumentsLoaded(documents) | Msg::Snapshot(documents) => {
            app.cache.apply_snapshot(documents);
            true
        }
        Msg::FileChosen(file) => {
            if let Some(file) = &file {
                if !app.settings.is_accepted_file(&file.name()) {
                    show_toast(&format!(
                        "{} is not a supported file type ({})",
                        file.name(),
                        app.settings.accept_attribute()
                    ));
                }
            }
            app.file = file;
            false
        }
        Msg::Upload => {
            let Some(file) = app.file.clone() else {
                alert("Please select a file");
                return false;
            };
            app.loading = true;

            let store = app.store.clone();
            let extractor = HttpExtractionService::new(app.settings.extraction_url.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match read_upload_file(file).await {
                    Ok(upload) => {
                        upload_document(&extractor, &store, &upload, upload_timestamp()).await
                    }
                    Err(err) => Err(UploadError::Extraction(GatewayError::Decode(err))),
                };
                link.send_message(Msg::UploadFinished(result));
            });
            true
        }
        Msg::UploadFinished(result) => {
            app.loading = false;
            match result {
                Ok(document) => {
                    log!(format!("uploaded {} as {}", document.name, document.id));
                    app.cache.set_current(document);
                    app.file = None;
                    if let Some(input) = app.file_input_ref.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                }
                Err(err @ UploadError::Extraction(_)) => {
                    error!(format!("upload error: {}", err));
                    alert("Failed to upload file");
                }
                Err(err @ UploadError::Store(_)) => {
                    error!(format!("upload error: {}", err));
                }
            }
            true
        }
        Msg::SelectDocument(id) => {
            app.cache.select(Some(id.as_str()).filter(|id| !id.is_empty()));
            true
        }
        Msg::DeleteDocument(id) => {
            let store = app.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match delete_document(&store, &id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(err) => error!(format!("could not delete document {}: {}", id, err)),
                }
            });
            false
        }
        Msg::Deleted(id) => {
            app.cache.remove(&id);
            true
        }
        Msg::SetTab(tab) => {
            app.active_tab = tab;
            true
        }
        Msg::SaveProduct(product, edit) => {
            let Some(document) = app.cache.current().cloned() else {
                return false;
            };
            let store = app.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match save_product_edit(&store, &document, &product, &edit).await {
                    Ok(updated) => link.send_message(Msg::ProductSaved(updated)),
                    Err(err) => error!(format!("could not save {}: {}", product, err)),
                }
            });
            false
        }
        Msg::ProductSaved(document) => {
            app.cache.upsert(document);
            true
        }
    }
}
