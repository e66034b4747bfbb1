// src/db/mod.rs

mod message_repo;
mod property_repo;
mod receipt_repo;
mod report_repo;
mod tenant_repo;
mod user_repo;

pub use message_repo::MessageRepository;
pub use property_repo::PropertyRepository;
pub use receipt_repo::ReceiptRepository;
pub use report_repo::ReportRepository;
pub use tenant_repo::TenantRepository;
pub use user_repo::UserRepository;
