use crate::store::DocumentStore;
use common::requests::Snapshot;
use log::{error, info, warn};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, RwLock};

/// Notices queued before the updater catches up.
const NOTICE_CAPACITY: usize = 100;
/// Snapshots a slow subscriber may fall behind before it starts skipping.
const SNAPSHOT_CAPACITY: usize = 16;

/// Shared state of the change feed.
///
/// Created once in `main.rs` and handed to actix as `web::Data`. Write
/// handlers use `notify`; the subscribe handler uses `subscribe` and
/// `latest`.
#[derive(Clone)]
pub struct ChangeFeed {
    /// Most recent snapshot, served to new subscribers before any update.
    latest: Arc<RwLock<Arc<Snapshot>>>,

    /// Sender side of the notice channel drained by `start_feed_updater`.
    tx: mpsc::Sender<ChangeNotice>,

    snapshots: broadcast::Sender<Arc<Snapshot>>,
}

/// A modification of the collection, reported by a write handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeNotice {
    pub(crate) document_id: String,
    pub(crate) kind: ChangeKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl ChangeNotice {
    pub fn new(document_id: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            document_id: document_id.into(),
            kind,
        }
    }
}

impl ChangeFeed {
    /// Creates the feed seeded with `initial`, plus the receiver that must be
    /// handed to `start_feed_updater`.
    pub fn new(initial: Snapshot) -> (Self, mpsc::Receiver<ChangeNotice>) {
        let (tx, rx) = mpsc::channel(NOTICE_CAPACITY);
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CAPACITY);
        let feed = Self {
            latest: Arc::new(RwLock::new(Arc::new(initial))),
            tx,
            snapshots,
        };
        (feed, rx)
    }

    /// Queues a change notice. A closed feed is logged and otherwise ignored;
    /// the write itself already succeeded.
    pub async fn notify(&self, notice: ChangeNotice) {
        if let Err(err) = self.tx.send(notice).await {
            warn!("change feed closed, dropping notice for {}", err.0.document_id);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Snapshot>> {
        self.snapshots.subscribe()
    }

    pub async fn latest(&self) -> Arc<Snapshot> {
        self.latest.read().await.clone()
    }

    async fn publish(&self, snapshot: Snapshot) {
        let snapshot = Arc::new(snapshot);
        *self.latest.write().await = snapshot.clone();
        // No receivers is fine: nobody is subscribed right now.
        let _ = self.snapshots.send(snapshot);
    }
}

/// Drains change notices and publishes a fresh snapshot for each.
///
/// Spawned once from `main.rs`; runs until every `ChangeFeed` clone (and so
/// every sender) is dropped.
pub async fn start_feed_updater(
    feed: ChangeFeed,
    store: DocumentStore,
    mut rx: mpsc::Receiver<ChangeNotice>,
) {
    while let Some(notice) = rx.recv().await {
        info!("document {} {:?}", notice.document_id, notice.kind);

        let reader = store.clone();
        match tokio::task::spawn_blocking(move || reader.list_all()).await {
            Ok(Ok(snapshot)) => feed.publish(snapshot).await,
            Ok(Err(err)) => error!("could not refresh change feed snapshot: {}", err),
            Err(join_err) => error!("change feed snapshot task failed: {}", join_err),
        }
    }
}
