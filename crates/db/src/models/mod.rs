pub mod report;
pub mod report_type;
pub mod status;
pub mod user;
