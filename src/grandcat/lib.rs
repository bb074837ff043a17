//! # Grandcat Architecture
//!
//! Grandcat is a **UI-agnostic product catalog engine**: a filterable,
//! sortable catalog with shareable URL state, a wishlist, and an admin
//! create/edit/delete flow, all persisted to a local key-value store. The CLI
//! is one client of the library; a web front end would be another.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, cli/)                                 │
//! │  - Parses arguments, prints cards and messages               │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                                 │
//! │  - Owns the session: store, catalog, wishlist, spec, config  │
//! │  - Parses selectors, surfaces storage warnings               │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                     │
//! │  - One operation each, returning CmdResult                   │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Domain: catalog, wishlist, query, url_state, render         │
//! │  Storage: store/ (KvStore over Fs/Mem backends)              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows store → [`catalog::Catalog`] → [`query::apply`] (driven by a
//! [`query::FilterSpec`] kept in sync with the page URL by [`url_state`]) →
//! [`render::cards`]. Every mutation persists immediately and the next
//! listing re-runs the query.
//!
//! ## Failure policy
//!
//! Nothing in the read path fails loudly. A corrupted stored catalog reseeds
//! from [`seed`], a stale position is a logged no-op, and a storage write
//! failure degrades the session to memory with a warning. Form validation is
//! the only place user input is rejected.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`catalog`]: The product repository
//! - [`wishlist`]: Liked product names
//! - [`query`]: Filter spec and the query engine
//! - [`url_state`]: Filter spec ⇄ query string / fragment
//! - [`render`]: View models for display
//! - [`selector`]: Position / id / name product selectors
//! - [`validation`]: Admin form validation
//! - [`store`]: Key-value storage abstraction and backends
//! - [`model`]: Core data types
//! - [`seed`]: The default catalog
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod seed;
pub mod selector;
pub mod store;
pub mod url_state;
pub mod validation;
pub mod wishlist;
