//! # viewr-domain
//!
//! Pure domain model for the viewr device monitor.
//!
//! ## Responsibilities
//! - Name the four key-value **namespaces** and how each one's values are
//!   relayed (raw text or JSON)
//! - Define **device state changes** written upstream and the default
//!   **device details** record
//! - Define the `<connection>::<device id>` key format
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The store boundary is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod namespace;

pub mod connection;
pub mod device;
