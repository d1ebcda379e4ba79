//! `cephas-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the generic record entity and the dashboard statistics
//! structures shared across the console.

pub mod entity;
pub mod stats;

pub use entity::{EntityId, Record};
pub use stats::{DashboardStats, PeriodStats};
