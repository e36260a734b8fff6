use crate::store::{DocumentStore, StoreError};
use actix_web::{web, HttpResponse};

/// `GET /api/documents`: every stored document in upload order.
pub(crate) async fn process(store: web::Data<DocumentStore>) -> Result<HttpResponse, StoreError> {
    let store = store.get_ref().clone();
    let documents = web::block(move || store.list_all()).await??;
    Ok(HttpResponse::Ok().json(documents))
}
