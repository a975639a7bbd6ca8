//! Rentsense - Rent-Revenue Sensitivity Analysis API
//!
//! This crate models rent-adjustment scenarios for student-housing properties
//! and decomposes the revenue delta between two scenarios into an
//! attributable waterfall.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
