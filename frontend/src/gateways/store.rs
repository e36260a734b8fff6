use super::{decode_error, ensure_ok, js_error, network_error};
use common::gateway::{DocumentStoreGateway, GatewayError, SnapshotCallback};
use common::model::document::{DocumentPatch, DocumentRecord, NewDocument};
use common::requests::{CreatedDocument, Snapshot, SNAPSHOT_EVENT};
use gloo_console::error;
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

const DOCUMENTS_PATH: &str = "/api/documents";

/// Document store served by the backend under `/api/documents`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpDocumentStore;

impl HttpDocumentStore {
    fn document_url(id: &str) -> String {
        format!("{}/{}", DOCUMENTS_PATH, id)
    }
}

/// Open `EventSource` on the change feed. Dropping it closes the connection.
pub struct SnapshotSubscription {
    source: EventSource,
    _listener: Closure<dyn FnMut(MessageEvent)>,
}

impl Drop for SnapshotSubscription {
    fn drop(&mut self) {
        self.source.close();
    }
}

impl DocumentStoreGateway for HttpDocumentStore {
    type Subscription = SnapshotSubscription;

    async fn list_all(&self) -> Result<Vec<DocumentRecord>, GatewayError> {
        let response = Request::get(DOCUMENTS_PATH)
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(response).await?.json().await.map_err(decode_error)
    }

    async fn create(&self, document: &NewDocument) -> Result<String, GatewayError> {
        let response = Request::post(DOCUMENTS_PATH)
            .json(document)
            .map_err(decode_error)?
            .send()
            .await
            .map_err(network_error)?;
        let created: CreatedDocument = ensure_ok(response)
            .await?
            .json()
            .await
            .map_err(decode_error)?;
        Ok(created.id)
    }

    async fn update(&self, id: &str, patch: &DocumentPatch) -> Result<(), GatewayError> {
        let response = Request::patch(&Self::document_url(id))
            .json(patch)
            .map_err(decode_error)?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let response = Request::delete(&Self::document_url(id))
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(response).await.map(|_| ())
    }

    fn subscribe(&self, on_change: SnapshotCallback) -> Result<Self::Subscription, GatewayError> {
        let url = format!("{}/subscribe", DOCUMENTS_PATH);
        let source = EventSource::new(&url)
            .map_err(|err| GatewayError::Subscription(format!("{:?}", err)))?;

        let listener = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            match serde_json::from_str::<Snapshot>(&text) {
                Ok(snapshot) => on_change(snapshot),
                Err(err) => error!(format!("could not decode snapshot: {}", err)),
            }
        });
        source
            .add_event_listener_with_callback(SNAPSHOT_EVENT, listener.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(SnapshotSubscription {
            source,
            _listener: listener,
        })
    }
}
