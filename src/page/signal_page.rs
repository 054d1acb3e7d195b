use dioxus::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use super::{Page, PageElement};

/// Page state held in Dioxus signals
///
/// The store mutates it through [`Page`] (reads use `peek` so the store never
/// subscribes a component), and the shell components render from it.
#[derive(Clone, Copy)]
pub struct SignalPage {
    classes: Signal<BTreeMap<PageElement, BTreeSet<String>>>,
    visible: Signal<BTreeMap<PageElement, bool>>,
    viewport_width: Signal<f64>,
}

impl SignalPage {
    /// Must be called inside a Dioxus scope
    pub fn new(viewport_width: f64) -> Self {
        Self {
            classes: Signal::new(BTreeMap::new()),
            visible: Signal::new(BTreeMap::from([(PageElement::Overlay, false)])),
            viewport_width: Signal::new(viewport_width),
        }
    }

    /// Space separated state classes of `element`, for a `class` attribute
    pub fn class_list(&self, element: PageElement) -> String {
        self.classes
            .read()
            .get(&element)
            .map(|set| set.iter().map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    pub fn is_visible(&self, element: PageElement) -> bool {
        self.visible.read().get(&element).copied().unwrap_or(true)
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        if *self.viewport_width.peek() != width {
            self.viewport_width.set(width);
        }
    }

    pub fn width(&self) -> f64 {
        *self.viewport_width.read()
    }
}

impl Page for SignalPage {
    fn exists(&self, _element: PageElement) -> bool {
        // The shell always renders every element
        true
    }

    fn has_class(&self, element: PageElement, class: &str) -> bool {
        self.classes
            .peek()
            .get(&element)
            .is_some_and(|set| set.contains(class))
    }

    fn add_class(&mut self, element: PageElement, class: &str) {
        if !self.has_class(element, class) {
            self.classes
                .write()
                .entry(element)
                .or_default()
                .insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: PageElement, class: &str) {
        if self.has_class(element, class) {
            if let Some(set) = self.classes.write().get_mut(&element) {
                set.remove(class);
            }
        }
    }

    fn set_visible(&mut self, element: PageElement, visible: bool) {
        let current = self.visible.peek().get(&element).copied();
        if current != Some(visible) {
            self.visible.write().insert(element, visible);
        }
    }

    fn viewport_width(&self) -> f64 {
        *self.viewport_width.peek()
    }
}
