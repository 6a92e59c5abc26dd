pub mod export_service;
pub mod summary_service;
pub mod transaction_service;

pub use export_service::ExportService;
pub use summary_service::{CategoryShare, SummaryData, SummaryService};
pub use transaction_service::TransactionService;
