//! Change feed behind `GET /api/documents/subscribe`.
//!
//! Handlers that modify the collection push a `ChangeNotice` into an MPSC
//! channel. A single updater task (`start_feed_updater`) drains the channel,
//! re-reads the collection and fans the fresh snapshot out to every
//! subscriber over a broadcast channel. Subscribers always receive the full
//! collection, never a diff.

mod state;

pub use state::{start_feed_updater, ChangeFeed, ChangeKind, ChangeNotice};
