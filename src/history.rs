/// Admin sections reachable from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    Products,
    Services,
    Orders,
    LandingPage,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Products,
        Section::Services,
        Section::Orders,
        Section::LandingPage,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Services => "Services",
            Self::Orders => "Orders",
            Self::LandingPage => "Landing page",
        }
    }

    /// Server route the section is served from
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard/",
            Self::Products => "/productos/",
            Self::Services => "/servicios/",
            Self::Orders => "/pedidos/",
            Self::LandingPage => "/landingpage/view/",
        }
    }
}

/// Back/forward history of visited sections
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryManager {
    history: Vec<Section>,
    current_index: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Create a new empty history manager
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            current_index: 0,
        }
    }

    /// Push a new section to the history
    /// Clears forward history if not at the end
    pub fn push(&mut self, section: Section) {
        // Don't add duplicate if it's the same as current
        if self.current() == Some(section) {
            return;
        }

        if self.history.is_empty() {
            self.history.push(section);
            self.current_index = 0;
        } else {
            self.history.truncate(self.current_index + 1);
            self.history.push(section);
            self.current_index += 1;
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        !self.history.is_empty() && self.current_index < self.history.len().saturating_sub(1)
    }

    /// Go back in history, returns the previous section
    pub fn go_back(&mut self) -> Option<Section> {
        if !self.history.is_empty() && self.current_index > 0 {
            self.current_index -= 1;
            return self.current();
        }
        None
    }

    /// Go forward in history, returns the next section
    pub fn go_forward(&mut self) -> Option<Section> {
        if self.can_go_forward() {
            self.current_index += 1;
            return self.current();
        }
        None
    }

    pub fn current(&self) -> Option<Section> {
        self.history.get(self.current_index).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
