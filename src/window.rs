use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

use crate::config::LayoutConfig;

/// Minimal stylesheet: state classes must be observable, nothing more.
///
/// Inlined in the head so the first paint already knows `no-transition`.
/// `BREAKPOINT` is replaced with the configured mobile breakpoint.
const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
#sidebar { position: fixed; top: 0; bottom: 0; left: 0; width: 250px; background: #1f2937; color: #f9fafb; transition: width 0.3s ease, transform 0.3s ease; overflow: hidden; z-index: 20; }
#sidebar.collapsed { width: 70px; }
#sidebar a { display: block; padding: 12px 20px; color: inherit; cursor: pointer; white-space: nowrap; }
#sidebar a.current { background: #374151; }
#navbar { position: fixed; top: 0; right: 0; left: 250px; height: 56px; display: flex; align-items: center; gap: 8px; padding: 0 16px; background: #ffffff; border-bottom: 1px solid #e5e7eb; transition: left 0.3s ease; z-index: 10; }
#mainContent { margin-left: 250px; padding: 80px 24px 24px; transition: margin-left 0.3s ease; }
#navbar.sidebar-collapsed { left: 70px; }
#mainContent.sidebar-collapsed { margin-left: 70px; }
#sidebarOverlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); z-index: 15; }
@media (max-width: BREAKPOINTpx) {
  #sidebar { transform: translateX(-100%); }
  #sidebar.active { transform: translateX(0); }
  #navbar { left: 0; }
  #mainContent { margin-left: 0; }
}
.no-transition { transition: none !important; }
"#;

/// Create the main window config
pub fn create_main_window_config(layout: &LayoutConfig) -> Config {
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("TEOmanager")
                .with_inner_size(LogicalSize::new(layout.window_width, layout.window_height)),
        )
        .with_custom_head(format!(
            "<style>{}</style>",
            STYLE.replace("BREAKPOINT", &layout.mobile_breakpoint.to_string())
        ))
}
