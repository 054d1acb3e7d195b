use dioxus::prelude::*;

use crate::page::PageElement;
use crate::state::AppState;

#[component]
pub fn MainContent() -> Element {
    let mut state = use_context::<AppState>();
    let classes = state.page.class_list(PageElement::MainContent);
    let section = state.current_section();
    let stored = state.sidebar.read().get();

    rsx! {
        main {
            id: PageElement::MainContent.dom_id(),
            class: "{classes}",

            h1 { "{section.title()}" }
            p { code { "{section.path()}" } }

            section {
                class: "layout-preference",
                p { "Stored sidebar layout: " code { "{stored}" } }
                button {
                    onclick: move |evt| {
                        evt.stop_propagation();
                        state.reset_layout();
                    },
                    "Reset sidebar layout"
                }
            }
        }
    }
}
