//! Core types for Framecraft.
//!
//! This module provides type-safe wrappers for billing and identity concepts.

pub mod customer;
pub mod id;
pub mod portal;

pub use customer::{CustomerIdError, StripeCustomerId};
pub use id::UserId;
pub use portal::{PortalRequest, PortalSession};
