// src/common/mod.rs

pub mod coerce;
pub mod error;
