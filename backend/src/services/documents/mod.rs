//! HTTP surface of the document store.
//!
//! Routes under `/api/documents`:
//! - `GET ""`: list every document in upload order.
//! - `POST ""`: store a `NewDocument`, answer `201` with `{ "id": … }`.
//! - `GET "/subscribe"`: server-sent `snapshot` events (see `feed`).
//! - `PATCH "/{id}"`: apply a `DocumentPatch`, `204` or `404`.
//! - `DELETE "/{id}"`: remove the document, `204` or `404`.
//!
//! Every successful write queues a change notice on the feed.

mod create;
mod delete;
mod list;
mod subscribe;
mod update;

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/documents";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/subscribe", get().to(subscribe::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
