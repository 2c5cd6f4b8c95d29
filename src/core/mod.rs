//! Core library components.
//!
//! Protocol parsing, item naming, the secret store client and the action
//! dispatcher that ties them together.

pub mod config;
pub mod constants;
pub mod dispatch;
pub mod item;
pub mod naming;
pub mod protocol;
pub mod store;
