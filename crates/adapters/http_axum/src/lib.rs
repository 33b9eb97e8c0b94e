//! # viewr-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only JSON/text API over the key-value namespaces
//!   (`/api/connection/…`, `/api/device/…`)
//! - Serve the `/devices` debug dump
//! - Render the server-side overview pages (`/`, `/dashboard/devices`)
//! - Map path parameters into application service calls (driving adapter)
//! - Map service results into HTTP responses, encoding each namespace's
//!   values the way [`Namespace::encoding`](viewr_domain::namespace::Namespace::encoding)
//!   says
//!
//! ## Dependency rule
//! Depends on `viewr-app` (for the port trait and services) and `viewr-domain`
//! (for domain types used in response mapping). Never leaks axum types into
//! the domain.

pub mod api;
pub mod dashboard;
pub mod debug;
pub mod error;
pub mod router;
pub mod state;
