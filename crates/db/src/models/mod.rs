pub mod category;
pub mod complaint;
pub mod department;
pub mod history;
pub mod profile;
