//! Shared model and logic for the document extraction viewer.
//!
//! The backend and the single-page client both depend on this crate for the
//! document model and the wire types. The client additionally uses the view
//! projections, the product edit reconciler, the document cache and the
//! upload/edit/delete flows.

pub mod cache;
pub mod edit;
pub mod flows;
pub mod gateway;
pub mod model;
pub mod requests;
pub mod views;
