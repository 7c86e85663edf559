mod report_repo;
mod status_repo;
mod type_repo;
mod user_repo;

pub use report_repo::ReportRepo;
pub use status_repo::StatusRepo;
pub use type_repo::TypeRepo;
pub use user_repo::UserRepo;
