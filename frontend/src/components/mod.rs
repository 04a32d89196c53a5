pub mod expenses;
pub mod field;
pub mod forms;
pub mod header;
pub mod modal;
pub mod sidebar;

pub use header::Header;
pub use sidebar::Sidebar;
