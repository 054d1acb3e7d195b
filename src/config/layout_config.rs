use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Viewport width (logical pixels) at or below which the layout is mobile
const DEFAULT_MOBILE_BREAKPOINT: f64 = 1024.0;

/// Quiet period before a burst of resize events is reconciled
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

/// Delay before suspended transitions are re-enabled
pub const DEFAULT_TRANSITION_RESTORE_MS: u64 = 50;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

fn default_mobile_breakpoint() -> f64 {
    DEFAULT_MOBILE_BREAKPOINT
}

fn default_resize_debounce_ms() -> u64 {
    DEFAULT_RESIZE_DEBOUNCE_MS
}

fn default_transition_restore_ms() -> u64 {
    DEFAULT_TRANSITION_RESTORE_MS
}

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

/// Configuration for layout reconciliation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "default_transition_restore_ms")]
    pub transition_restore_ms: u64,
    /// Initial window inner width
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Initial window inner height
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            resize_debounce_ms: default_resize_debounce_ms(),
            transition_restore_ms: default_transition_restore_ms(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl LayoutConfig {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn transition_restore(&self) -> Duration {
        Duration::from_millis(self.transition_restore_ms)
    }
}
