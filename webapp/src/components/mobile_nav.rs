use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    drawer::MobileNav as DrawerState,
    nav::{CALL_TO_ACTION, NavigationEntry, SITE_NAV, TOP_LINKS},
};

use crate::CONFIG;

#[derive(Clone, PartialEq, Props)]
struct DrawerLinkProps {
    entry: NavigationEntry,
    drawer: Signal<DrawerState>,
    #[props(default)]
    class: Option<String>,
}

// every leaf link closes the drawer on activation; the router handles the navigation
#[component]
fn DrawerLink(props: DrawerLinkProps) -> Element {
    let entry = props.entry;
    let mut drawer = props.drawer;
    let class = props.class.unwrap_or_else(|| String::from("nav-menu-item"));

    rsx! {
        Link {
            to: entry.href,
            class,
            onclick: move |_| {
                drawer.write().activate(entry.href);
            },
            "{entry.label}"
        }
    }
}

// mobile navigation
//
// a trigger button plus a slide-in sheet.  the sheet lists the same groups as the
// desktop menus as a single-expansion accordion, then the top-level links and the call
// to action.  the overlay, the close button and every link dismiss it
#[component]
pub fn MobileNav() -> Element {
    let mut drawer = use_signal(DrawerState::new);
    let limit = CONFIG.nav.mobile_limit;

    rsx! {
        button {
            class: "btn btn-ghost btn-icon mobile-only",
            r#type: "button",
            aria_expanded: "{drawer.read().is_open()}",
            onclick: move |_| drawer.write().set_open(true),
            span { aria_hidden: "true", "☰" }
            span { class: "sr-only", "Toggle menu" }
        }

        if drawer.read().is_open() {
            div {
                class: "sheet-overlay",
                onclick: move |evt| {
                    evt.stop_propagation();
                    drawer.write().set_open(false);
                },
            }
            div {
                class: "sheet-content",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "sheet-header",
                    h2 { class: "sheet-title", "Navigation" }
                    button {
                        class: "btn btn-ghost btn-icon",
                        r#type: "button",
                        aria_label: "Close menu",
                        onclick: move |_| drawer.write().set_open(false),
                        "×"
                    }
                }

                nav { class: "mobile-nav",
                    div { class: "accordion",
                        for (index, group) in SITE_NAV.iter().enumerate() {
                            div {
                                key: "{group.slug()}",
                                class: if drawer.read().accordion().is_expanded(index) { "accordion-item open" } else { "accordion-item" },
                                button {
                                    class: "accordion-trigger",
                                    r#type: "button",
                                    aria_expanded: "{drawer.read().accordion().is_expanded(index)}",
                                    onclick: move |_| drawer.write().toggle_section(index),
                                    "{group.title}"
                                    span { class: "caret", aria_hidden: "true", "▾" }
                                }
                                if drawer.read().accordion().is_expanded(index) {
                                    div { class: "accordion-content",
                                        for entry in group.mobile_items(limit).iter() {
                                            DrawerLink { key: "{entry.label}", entry: *entry, drawer }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "mobile-links",
                        for entry in TOP_LINKS.iter() {
                            DrawerLink { key: "{entry.href}", entry: *entry, drawer }
                        }
                    }

                    DrawerLink {
                        entry: CALL_TO_ACTION,
                        drawer,
                        class: String::from("btn btn-primary btn-block"),
                    }
                }
            }
        }
    }
}
