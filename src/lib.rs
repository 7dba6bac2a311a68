#![forbid(unsafe_code)]
//! Certplan: deterministic provisioning plans for the Let's Encrypt client.
//!
//! Resolution model highlights:
//! - Parameters are validated before any other stage runs; the only hard
//!   failures are the two policy violations (TOS not accepted, no contact
//!   address). Everything else degrades to totals-with-defaults.
//! - OS facts feed an ordered strategy table (first match wins) instead of
//!   nested branching; supporting a new OS release is a data change.
//! - The output `Plan` is pure data: resource specs plus typed `before` /
//!   `notifies` edges, consumed by external executors via `adapters`.

pub mod constants;
pub mod adapters;
pub mod api;
pub mod logging;
pub mod merge;
pub mod preflight;
pub mod strategy;
pub mod types;

pub use api::*;
