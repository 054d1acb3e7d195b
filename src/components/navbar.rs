use dioxus::prelude::*;

use crate::page::PageElement;
use crate::sidebar::SidebarEvent;
use crate::state::AppState;

#[component]
pub fn Navbar() -> Element {
    let mut state = use_context::<AppState>();
    let classes = state.page.class_list(PageElement::Navbar);
    let can_go_back = state.history.read().can_go_back();
    let can_go_forward = state.history.read().can_go_forward();
    let width = state.page.width();
    let viewport = if state.sidebar.read().is_mobile() {
        "Mobile"
    } else {
        "Desktop"
    };

    rsx! {
        header {
            id: PageElement::Navbar.dom_id(),
            class: "{classes}",

            button {
                id: PageElement::Toggle.dom_id(),
                title: "Toggle sidebar",
                onclick: move |evt| {
                    evt.prevent_default();
                    evt.stop_propagation();
                    state.dispatch(SidebarEvent::ToggleClick);
                },
                "☰"
            }
            button {
                disabled: !can_go_back,
                onclick: move |_| state.go_back(),
                "←"
            }
            button {
                disabled: !can_go_forward,
                onclick: move |_| state.go_forward(),
                "→"
            }
            strong { "TEOmanager" }
            span { class: "viewport-mode", "{viewport} · {width:.0}px" }
        }
    }
}
