// src/handlers/mod.rs

pub mod admin;
pub mod messages;
pub mod properties;
pub mod receipts;
pub mod reports;
pub mod tenants;
