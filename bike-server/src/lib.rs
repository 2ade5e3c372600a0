//! Live bike-share availability map server.
//!
//! Periodically fetches full station snapshots for one bike-share network,
//! reconciles them into a validated marker collection, and serves a Leaflet
//! map that displays it.

pub mod domain;
pub mod feed;
pub mod store;
pub mod web;
