use dioxus::prelude::*;

use crate::history::{HistoryManager, Section};
use crate::page::SignalPage;
use crate::sidebar::{SidebarEvent, SidebarStore};
use crate::state::Storage;
use crate::timer::TaskTimer;

/// The sidebar store as hosted by the desktop shell
pub type SidebarController = SidebarStore<Box<dyn Storage>, SignalPage, TaskTimer>;

/// Per-window shell state shared through context
#[derive(Clone, Copy)]
pub struct AppState {
    pub sidebar: Signal<SidebarController>,
    pub page: SignalPage,
    pub history: Signal<HistoryManager>,
}

impl AppState {
    pub fn dispatch(&mut self, event: SidebarEvent) {
        self.sidebar.write().handle(event);
    }

    pub fn current_section(&self) -> Section {
        self.history.read().current().unwrap_or_default()
    }

    /// Open a section as a new page view
    pub fn navigate(&mut self, section: Section) {
        if self.history.peek().current() == Some(section) {
            return;
        }
        self.history.write().push(section);
        tracing::debug!(path = section.path(), "Navigated");
        self.dispatch(SidebarEvent::DocumentReady);
    }

    pub fn go_back(&mut self) {
        let section = self.history.write().go_back();
        if let Some(section) = section {
            tracing::debug!(path = section.path(), "History back");
            self.dispatch(SidebarEvent::HistoryNavigation);
        }
    }

    pub fn go_forward(&mut self) {
        let section = self.history.write().go_forward();
        if let Some(section) = section {
            tracing::debug!(path = section.path(), "History forward");
            self.dispatch(SidebarEvent::HistoryNavigation);
        }
    }

    /// Forget the stored preference and fall back to the default layout
    pub fn reset_layout(&mut self) {
        self.sidebar.write().reset();
    }
}
