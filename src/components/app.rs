use dioxus::desktop::tao::event::{Event as TaoEvent, WindowEvent};
use dioxus::desktop::{use_wry_event_handler, window};
use dioxus::prelude::*;
use std::sync::OnceLock;
use tokio::sync::mpsc;

use super::content::MainContent;
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::config::Config;
use crate::history::{HistoryManager, Section};
use crate::page::{Page, PageElement, SignalPage};
use crate::sidebar::{ClickTarget, Readiness, SidebarEvent, SidebarStore};
use crate::state::{AppState, FileStorage, MemoryStorage, Storage};
use crate::timer::TaskTimer;

/// Settings resolved from the command line and config file before launch
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub config: Config,
    /// Keep the layout preference in memory only
    pub ephemeral: bool,
}

/// Set once in `main` before the window is created
pub static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

pub fn open_storage(options: &LaunchOptions) -> Box<dyn Storage> {
    if options.ephemeral {
        return Box::new(MemoryStorage::new());
    }
    Box::new(FileStorage::new(options.config.storage.file_path()))
}

#[component]
pub fn App() -> Element {
    let mut state = use_context_provider(|| {
        let options = LAUNCH_OPTIONS.get().cloned().unwrap_or_default();

        let window = window();
        let width = window
            .inner_size()
            .to_logical::<f64>(window.scale_factor())
            .width;
        let page = SignalPage::new(width);

        let (fired_tx, mut fired_rx) = mpsc::unbounded_channel();
        let mut store = SidebarStore::new(
            open_storage(&options),
            page,
            TaskTimer::new(fired_tx),
            &options.config,
        );
        // The stored layout lands before the first paint
        store.boot(Readiness::of(&page));
        let mut sidebar = Signal::new(store);

        spawn(async move {
            while let Some(id) = fired_rx.recv().await {
                sidebar.write().handle(SidebarEvent::TimerFired(id));
            }
        });

        let mut history = HistoryManager::new();
        history.push(Section::default());

        AppState {
            sidebar,
            page,
            history: Signal::new(history),
        }
    });

    use_wry_event_handler(move |event, _| match event {
        TaoEvent::WindowEvent {
            event: WindowEvent::Resized(size),
            window_id,
            ..
        } => {
            let window = window();
            if window_id == &window.id() {
                let width = size.to_logical::<f64>(window.scale_factor()).width;
                state.page.set_viewport_width(width);
                state.dispatch(SidebarEvent::Resize);
            }
        }
        TaoEvent::WindowEvent {
            event: WindowEvent::Focused(focused),
            window_id,
            ..
        } => {
            if window_id == &window().id() {
                state.dispatch(SidebarEvent::VisibilityChange { hidden: !focused });
            }
        }
        _ => {}
    });

    let overlay_style = if state.page.is_visible(PageElement::Overlay) {
        "display: block;"
    } else {
        "display: none;"
    };

    rsx! {
        div {
            class: "app-container",
            onclick: move |_| {
                state.dispatch(SidebarEvent::DocumentClick(ClickTarget::Elsewhere));
            },

            Sidebar {}
            Navbar {}
            MainContent {}

            div {
                id: PageElement::Overlay.dom_id(),
                style: "{overlay_style}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    state.dispatch(SidebarEvent::OverlayClick);
                },
            }
        }
    }
}
