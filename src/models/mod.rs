// src/models/mod.rs

pub mod listing;
pub mod message;
pub mod property;
pub mod receipt;
pub mod report;
pub mod tenant;
pub mod user;
