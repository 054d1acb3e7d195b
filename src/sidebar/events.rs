use super::reconcile::{self, SidebarClasses};
use super::SidebarStore;
use crate::page::{self, Page, PageElement};
use crate::state::Storage;
use crate::timer::{Timer, TimerId};

/// Whether the page markup has been parsed when the store boots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Loading,
    Ready,
}

impl Readiness {
    /// The markup counts as parsed once the sidebar element exists
    pub fn of(page: &impl Page) -> Self {
        if page.exists(PageElement::Sidebar) {
            Self::Ready
        } else {
            Self::Loading
        }
    }
}

/// Where a document-level click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the sidebar container
    Sidebar,
    /// On the toggle control
    Toggle,
    Overlay,
    Elsewhere,
}

/// Lifecycle and interaction events the host forwards to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    DocumentReady,
    /// Back/forward navigation
    HistoryNavigation,
    /// The viewport width changed; read it from the page at fire time
    Resize,
    VisibilityChange {
        hidden: bool,
    },
    ToggleClick,
    OverlayClick,
    DocumentClick(ClickTarget),
    TimerFired(TimerId),
}

impl<S: Storage, P: Page, T: Timer> SidebarStore<S, P, T> {
    /// Apply the stored layout as early as possible
    ///
    /// With a parsed page this reconciles right away; otherwise it waits for
    /// [`SidebarEvent::DocumentReady`].
    pub fn boot(&mut self, readiness: Readiness) {
        match readiness {
            Readiness::Ready => self.apply(),
            Readiness::Loading => {
                tracing::debug!("Page still loading, deferring sidebar state");
            }
        }
    }

    pub fn handle(&mut self, event: SidebarEvent) {
        tracing::trace!(?event, "Sidebar event");
        match event {
            SidebarEvent::DocumentReady | SidebarEvent::HistoryNavigation => self.apply(),
            SidebarEvent::Resize => self.schedule_resize(),
            SidebarEvent::VisibilityChange { hidden: false } => self.apply(),
            SidebarEvent::VisibilityChange { hidden: true } => {}
            SidebarEvent::ToggleClick => self.toggle(),
            SidebarEvent::OverlayClick => self.close_mobile(),
            SidebarEvent::DocumentClick(target) => self.handle_document_click(target),
            SidebarEvent::TimerFired(id) => self.timer_fired(id),
        }
    }

    /// User toggle: flip the flag of the current viewport mode, animated
    pub fn toggle(&mut self) {
        let mode = self.viewport_mode();
        let current = SidebarClasses {
            collapsed: self.page.has_class(PageElement::Sidebar, page::COLLAPSED),
            active: self.page.has_class(PageElement::Sidebar, page::ACTIVE),
        };
        let (plan, state) = reconcile::toggle(mode, current);
        self.animate(plan, state);
    }

    /// Close the mobile sidebar and remember it closed
    pub fn close_mobile(&mut self) {
        let (plan, state) = reconcile::close_mobile();
        self.animate(plan, state);
    }

    fn handle_document_click(&mut self, target: ClickTarget) {
        if matches!(target, ClickTarget::Sidebar | ClickTarget::Toggle) {
            return;
        }
        if self.is_mobile() && self.page.has_class(PageElement::Sidebar, page::ACTIVE) {
            self.close_mobile();
        }
    }

    /// Restart the quiet period; only the last resize reconciles
    fn schedule_resize(&mut self) {
        if let Some(id) = self.pending_resize.take() {
            self.timer.cancel(id);
        }
        self.pending_resize = Some(self.timer.schedule(self.resize_debounce));
    }

    fn timer_fired(&mut self, id: TimerId) {
        if self.pending_resize == Some(id) {
            self.pending_resize = None;
            self.apply_after_resize();
        } else if self.pending_restore == Some(id) {
            self.pending_restore = None;
            for element in std::mem::take(&mut self.suspended) {
                self.page.remove_class(element, page::NO_TRANSITION);
            }
        } else {
            tracing::trace!(?id, "Ignoring stale timer");
        }
    }
}
