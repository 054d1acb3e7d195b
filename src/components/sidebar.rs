use dioxus::prelude::*;

use crate::history::Section;
use crate::page::PageElement;
use crate::state::AppState;

#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let classes = state.page.class_list(PageElement::Sidebar);
    let current = state.current_section();

    rsx! {
        aside {
            id: PageElement::Sidebar.dom_id(),
            class: "{classes}",
            // Clicks inside the sidebar are never outside clicks
            onclick: move |evt| evt.stop_propagation(),

            nav {
                for section in Section::ALL {
                    a {
                        key: "{section.path()}",
                        class: if section == current { "current" },
                        onclick: move |_| state.navigate(section),
                        "{section.title()}"
                    }
                }
            }
        }
    }
}
