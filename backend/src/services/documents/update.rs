use crate::feed::{ChangeFeed, ChangeKind, ChangeNotice};
use crate::store::{DocumentStore, StoreError};
use actix_web::{web, HttpResponse};
use common::model::document::DocumentPatch;

/// `PATCH /api/documents/{id}`: applies a partial update.
pub(crate) async fn process(
    id: web::Path<String>,
    store: web::Data<DocumentStore>,
    feed: web::Data<ChangeFeed>,
    payload: web::Json<DocumentPatch>,
) -> Result<HttpResponse, StoreError> {
    let id = id.into_inner();
    let patch = payload.into_inner();
    let store = store.get_ref().clone();
    let target = id.clone();

    web::block(move || store.update(&target, &patch)).await??;

    feed.notify(ChangeNotice::new(id, ChangeKind::Updated)).await;
    Ok(HttpResponse::NoContent().finish())
}
