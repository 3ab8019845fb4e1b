pub mod category_repo;
pub mod complaint_repo;
pub mod department_repo;
pub mod history_repo;
pub mod profile_repo;

pub use category_repo::CategoryRepo;
pub use complaint_repo::ComplaintRepo;
pub use department_repo::DepartmentRepo;
pub use history_repo::HistoryRepo;
pub use profile_repo::ProfileRepo;
