use crate::feed::ChangeFeed;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::web::{self, Bytes};
use actix_web::HttpResponse;
use common::requests::{Snapshot, SNAPSHOT_EVENT};
use futures_util::stream::{self, StreamExt};
use log::{error, warn};
use std::convert::Infallible;
use tokio::sync::broadcast::error::RecvError;

/// `GET /api/documents/subscribe`: server-sent events carrying the whole
/// collection, once on connect and again after every change.
pub(crate) async fn process(feed: web::Data<ChangeFeed>) -> HttpResponse {
    // Subscribe before reading the latest snapshot so no change slips between.
    let rx = feed.subscribe();
    let initial = feed.latest().await;

    let first = stream::once(async move { Ok::<_, Infallible>(snapshot_event(&initial)) });
    let updates = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(snapshot) => return Some((Ok::<_, Infallible>(snapshot_event(&snapshot)), rx)),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("subscriber lagged, skipped {} snapshots", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/event-stream"))
        .insert_header((CACHE_CONTROL, "no-cache"))
        .streaming(first.chain(updates))
}

/// Encodes one snapshot as a server-sent event frame.
pub(crate) fn snapshot_event(snapshot: &Snapshot) -> Bytes {
    let data = serde_json::to_string(snapshot).unwrap_or_else(|err| {
        error!("could not encode snapshot: {}", err);
        "[]".to_string()
    });
    Bytes::from(format!("event: {}\ndata: {}\n\n", SNAPSHOT_EVENT, data))
}
