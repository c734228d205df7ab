//! Framecraft Core - Shared domain types.
//!
//! This crate provides the types used across Framecraft components:
//! - `web` - HTTP tier (billing portal endpoint, navigation fragments)
//! - `integration-tests` - Black-box tests for the HTTP tier
//!
//! # Architecture
//!
//! The core crate contains only types and static data - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for user ids, billing customer ids, and
//!   billing portal request/response payloads
//! - [`nav`] - The in-app navigation catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod nav;
pub mod types;

pub use nav::{NavIcon, NavItem, PRIMARY_NAV, ROOT_PATH, SECONDARY_NAV};
pub use types::*;
