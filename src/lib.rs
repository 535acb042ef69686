//! Wage Gap Resolution Engine
//!
//! This crate compares a worker's current hourly wage against two benchmarks,
//! inflation parity since their last raise and the current market rate for
//! their job and location, and reports the gaps in hourly and annual terms.
//!
//! Computation is split in two stages. [`provider::acquire_estimate`] makes a
//! single best-effort attempt at a live market estimate and never fails;
//! [`calculation::resolve`] is a pure, synchronous function over the input,
//! the optional estimate, and the static [`config::ReferenceData`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
