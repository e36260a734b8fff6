use super::messages::Tab;
use crate::gateways::{HttpDocumentStore, SnapshotSubscription};
use common::cache::DocumentCache;
use common::model::settings::ClientSettings;
use yew::NodeRef;

/// Root component state.
///
/// Owns the document cache; child tables only ever receive projected rows.
pub struct App {
    pub cache: DocumentCache,
    pub store: HttpDocumentStore,
    pub settings: ClientSettings,

    /// Live change-feed connection, dropped on `destroy`.
    pub subscription: Option<SnapshotSubscription>,

    pub file: Option<web_sys::File>,
    pub file_input_ref: NodeRef,

    /// An upload is in flight; the upload button is disabled.
    pub loading: bool,
    pub active_tab: Tab,
}

impl App {
    pub fn new() -> Self {
        Self {
            cache: DocumentCache::default(),
            store: HttpDocumentStore,
            settings: ClientSettings::default(),
            subscription: None,
            file: None,
            file_input_ref: NodeRef::default(),
            loading: false,
            active_tab: Tab::Invoices,
        }
    }
}
