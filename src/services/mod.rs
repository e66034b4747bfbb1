// src/services/mod.rs

pub mod auth;
pub mod listing;
pub mod message_service;
pub mod property_service;
pub mod receipt_service;
pub mod report_service;
pub mod tenant_service;
pub mod user_service;
