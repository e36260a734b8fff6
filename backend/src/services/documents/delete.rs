use crate::feed::{ChangeFeed, ChangeKind, ChangeNotice};
use crate::store::{DocumentStore, StoreError};
use actix_web::{web, HttpResponse};
use log::info;

/// `DELETE /api/documents/{id}`.
pub(crate) async fn process(
    id: web::Path<String>,
    store: web::Data<DocumentStore>,
    feed: web::Data<ChangeFeed>,
) -> Result<HttpResponse, StoreError> {
    let id = id.into_inner();
    let store = store.get_ref().clone();
    let target = id.clone();

    web::block(move || store.delete(&target)).await??;
    info!("deleted document {}", id);

    feed.notify(ChangeNotice::new(id, ChangeKind::Deleted)).await;
    Ok(HttpResponse::NoContent().finish())
}
