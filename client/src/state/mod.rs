//! Client-side session state: persisted auth facts and the reactive
//! session lifecycle controller.

pub mod session;
pub mod store;
