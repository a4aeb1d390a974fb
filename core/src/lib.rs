//! Fetch-and-pick core for the hero randomizer.
//!
//! # Overview
//! Downloads the full superhero collection from a JSON API, keeps it in
//! memory for the session, and hands out uniformly random picks from it.
//! A presentation layer drives `HeroStore` and renders whatever it reports.
//!
//! # Design
//! - `HeroClient` builds one request, runs it through a `Transport`, and maps
//!   every failure into the closed `HeroError` set.
//! - `RandomSelector` is a pure uniform choice over a slice.
//! - `HeroStore` owns the collection, the selection, and the `LoadState`
//!   machine; it never returns an error, it records one.
//! - Nothing is global: callers construct the client and hand it to the store.

pub mod client;
pub mod error;
pub mod http;
pub mod selector;
pub mod store;
pub mod types;

pub use client::{HeroClient, DEFAULT_BASE_URL};
pub use error::HeroError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportFailure, UreqTransport};
pub use selector::RandomSelector;
pub use store::{HeroStore, LoadState, StoreUpdate};
pub use types::{Appearance, Biography, Collection, Connections, Images, PowerStats, Superhero, Work};
