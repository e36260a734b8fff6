use crate::feed::{ChangeFeed, ChangeKind, ChangeNotice};
use crate::store::{DocumentStore, StoreError};
use actix_web::{web, HttpResponse};
use common::model::document::NewDocument;
use common::requests::CreatedDocument;
use log::info;

/// `POST /api/documents`: stores a new document and answers with its id.
pub(crate) async fn process(
    store: web::Data<DocumentStore>,
    feed: web::Data<ChangeFeed>,
    payload: web::Json<NewDocument>,
) -> Result<HttpResponse, StoreError> {
    let document = payload.into_inner();
    let name = document.name.clone();
    let store = store.get_ref().clone();

    let id = web::block(move || store.create(&document)).await??;
    info!("stored document {} ({})", id, name);

    feed.notify(ChangeNotice::new(id.clone(), ChangeKind::Created))
        .await;
    Ok(HttpResponse::Created().json(CreatedDocument { id }))
}
