//! Networking layer: transport abstraction, request wrapper, and typed
//! API operations against the EventSphere REST backend.

pub mod api;
pub mod auth;
pub mod availability;
pub mod error;
pub mod events;
pub mod http;
pub mod types;
