//! # viewr-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven/outbound port adapters must implement:
//!   - `KeyValueStore` — `get` / `list` / `put` against a namespace
//! - Define one **driving/inbound** service per HTTP resource:
//!   - `ConnectionStatusService` — connection-device status by id, key list
//!   - `DeviceConnectionService` — device → connection mapping by id, full mapping list
//!   - `DeviceDetailsService` — device details by id
//!   - `DeviceStatusService` — device status by id, key list, debug dump
//!   - `OverviewService` — connection and device-state groupings for the dashboard
//!   - `StateChangeService` — write path fanning a state change out to every namespace
//! - Orchestrate domain objects without knowing *how* the store works
//!
//! ## Dependency rule
//! Depends on `viewr-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
