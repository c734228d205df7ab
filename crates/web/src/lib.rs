//! Framecraft web tier library.
//!
//! This crate provides the HTTP surface as a library, allowing it to be
//! tested and reused:
//! - `POST /api/billing/portal` - billing portal sessions via Stripe
//! - `GET /partials/sidebar` - the in-app navigation sidebar

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
