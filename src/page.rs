// Page elements the sidebar layout is reconciled against

mod signal_page;
pub use signal_page::SignalPage;

/// Sidebar is minimized (desktop)
pub const COLLAPSED: &str = "collapsed";
/// Sidebar overlay is open (mobile)
pub const ACTIVE: &str = "active";
/// Navbar and main content follow a collapsed sidebar
pub const SIDEBAR_COLLAPSED: &str = "sidebar-collapsed";
/// Suspends CSS transitions while state is applied
pub const NO_TRANSITION: &str = "no-transition";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageElement {
    Sidebar,
    Navbar,
    MainContent,
    Overlay,
    Toggle,
}

impl PageElement {
    /// Elements whose transitions are suspended during instant reconciliation
    pub const ANIMATED: [PageElement; 3] = [
        PageElement::Sidebar,
        PageElement::Navbar,
        PageElement::MainContent,
    ];

    /// Elements that follow the sidebar's collapsed state on desktop
    pub const FRAME: [PageElement; 2] = [PageElement::Navbar, PageElement::MainContent];

    /// Fixed element identifier in the page markup
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Navbar => "navbar",
            Self::MainContent => "mainContent",
            Self::Overlay => "sidebarOverlay",
            Self::Toggle => "sidebarToggle",
        }
    }
}

/// Class-list toggling over the page elements
///
/// Operations on an element that does not exist are ignored by implementors.
pub trait Page {
    fn exists(&self, element: PageElement) -> bool;
    fn has_class(&self, element: PageElement, class: &str) -> bool;
    fn add_class(&mut self, element: PageElement, class: &str);
    fn remove_class(&mut self, element: PageElement, class: &str);
    fn set_visible(&mut self, element: PageElement, visible: bool);
    /// Viewport width in logical pixels
    fn viewport_width(&self) -> f64;

    fn set_class(&mut self, element: PageElement, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }
}
