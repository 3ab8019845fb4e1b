pub mod category;
pub mod complaint;
pub mod department;
pub mod health;
pub mod profile;
pub mod stats;
