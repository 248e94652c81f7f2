//! # Folio Architecture
//!
//! Folio is a **UI-agnostic catalog library** with two clients built on
//! top of it: an HTTP API server and a terminal client. The core never
//! assumes which one is calling.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/)            CLI client (client/, main)   │
//! │  - axum routes, status codes   - fetch, filter, render      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Request validation and business logic                    │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ItemStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Lifecycle Contract
//!
//! Items are created whole (all required fields validated before the
//! store is touched), never updated, and deleted by id where a missing
//! id silently succeeds. `list` returns newest-first; all filtering is
//! the client engine's job, done against a local snapshot with no
//! network round-trip.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The HTTP handlers and the terminal client are both thin shells over
//! the same facade, and tests drive it directly over `InMemoryStore`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Validation and business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `ItemKind`, drafts)
//! - [`http`]: axum routes and error-to-status mapping
//! - [`client`]: snapshot/filter engine, transport port, rendering
//! - [`config`]: Environment configuration with defaults
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod store;
