// State module - layout preference, its persistence and the shell state

mod app_state;
pub use app_state::AppState;

mod persistence;
pub use persistence::{FileStorage, MemoryStorage, Storage};

mod sidebar_state;
pub use sidebar_state::{SidebarState, ViewportMode};
