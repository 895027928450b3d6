//! Client-side core for the menu dashboard.
//!
//! # Overview
//! Keeps an in-memory list of menu items consistent with the remote `/foods`
//! resource. `MenuClient` builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network; a host-provided
//! `Transport` executes the round-trip; `MenuSync` owns the list and applies
//! each acknowledged mutation to it.
//!
//! # Design
//! - `MenuClient` is stateless. It holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the core stays deterministic.
//! - `MenuSync` never mutates local state before the server answers.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod sync;
pub mod transport;
pub mod types;

pub use client::MenuClient;
pub use config::ClientConfig;
pub use error::{ApiError, SyncError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use sync::MenuSync;
pub use transport::Transport;
pub use types::{Food, FoodDraft, NewFood};
