//! Page components, one per route.

pub mod about;
pub mod account;
pub mod contact;
pub mod dashboard;
pub mod event_detail;
pub mod events;
pub mod gallery;
pub mod home;
pub mod login;
pub mod signup;
pub mod sitemap;
pub mod verify_email;
