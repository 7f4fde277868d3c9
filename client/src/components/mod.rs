//! Shared UI components.

pub mod event_card;
pub mod fullscreen_loader;
pub mod header;
pub mod protected;
