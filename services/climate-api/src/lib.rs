//! Climate API Service Library
//!
//! HTTP surface over the station/measurement dataset: precipitation,
//! stations, temperature observations and temperature statistics.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod responses;
pub mod routes;
pub mod state;
