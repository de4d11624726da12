pub mod compliance;
pub mod permits;
pub mod personnel;
pub mod reports;
pub mod ventures;
