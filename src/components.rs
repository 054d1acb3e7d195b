pub mod app;
pub mod content;
pub mod navbar;
pub mod sidebar;
