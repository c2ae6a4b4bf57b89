//! Notable-event extraction over a date range.
//!
//! This crate provides:
//! - [`major_events`], the day-stepped range scan for sign ingresses,
//!   New/Full Moon days, and exact aspects
//! - [`AstroEvent`] / [`EventKind`], the record types the scan emits
//!
//! The scan builds on [`stellium_chart::ChartCalculator`]; it performs no
//! I/O of its own beyond the calculator's provider lookups.

pub mod scan;
pub mod types;

pub use scan::major_events;
pub use types::{AstroEvent, EventKind};
