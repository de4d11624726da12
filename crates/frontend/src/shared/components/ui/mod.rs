mod badge;
mod select;

pub use badge::Badge;
pub use select::Select;
