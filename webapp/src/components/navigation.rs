use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    drawer::Dropdown,
    nav::{NavigationEntry, NavigationGroup, SITE_NAV, TOP_LINKS, is_active},
};

use crate::Route;

#[derive(Clone, PartialEq, Props)]
struct NavMenuLinkProps {
    entry: NavigationEntry,
}

// one link in a dropdown: title plus a two-line description
#[component]
fn NavMenuLink(props: NavMenuLinkProps) -> Element {
    let entry = props.entry;

    rsx! {
        li {
            Link { to: entry.href, class: "nav-menu-link",
                div { class: "nav-menu-link-title", "{entry.label}" }
                if let Some(description) = entry.description {
                    p { class: "nav-menu-link-desc", "{description}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavMenuProps {
    group: NavigationGroup,
}

// a dropdown for one navigation group
//
// hover, focus and click all reveal the list; leaving the menu hides it.  every menu
// tracks its own state, so moving quickly between triggers can leave two open at once
#[component]
fn NavMenu(props: NavMenuProps) -> Element {
    let group = props.group;
    let mut menu = use_signal(Dropdown::default);
    let open = menu.read().is_open();

    let content_class = if group.items.len() > 3 {
        "nav-menu-content"
    } else {
        "nav-menu-content single-column"
    };

    rsx! {
        div {
            class: if open { "nav-menu open" } else { "nav-menu" },
            onmouseenter: move |_| menu.write().reveal(),
            onmouseleave: move |_| menu.write().hide(),
            onfocusin: move |_| menu.write().reveal(),
            onfocusout: move |_| menu.write().hide(),
            button {
                class: "nav-menu-trigger nav-menu-item",
                r#type: "button",
                aria_expanded: "{open}",
                onclick: move |_| menu.write().reveal(),
                "{group.title}"
                span { class: "caret", aria_hidden: "true", "▾" }
            }
            if open {
                ul { class: content_class,
                    for entry in group.items.iter() {
                        NavMenuLink { key: "{entry.label}", entry: *entry }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TopLinkProps {
    entry: NavigationEntry,
    current_path: String,
}

#[component]
fn TopLink(props: TopLinkProps) -> Element {
    let entry = props.entry;
    let class = if is_active(&props.current_path, entry.href) {
        "nav-menu-item active"
    } else {
        "nav-menu-item"
    };

    rsx! {
        Link {
            class,
            to: entry.href,
            "{entry.label}"
        }
    }
}

// desktop navigation
//
// the grouped dropdowns followed by the top-level links; the active highlight is
// recomputed from the current route on every render
#[component]
pub fn DesktopNav() -> Element {
    let current_path = use_route::<Route>().to_string();

    rsx! {
        nav { class: "desktop-nav",
            for group in SITE_NAV.iter() {
                NavMenu { key: "{group.title}", group: *group }
            }
            for entry in TOP_LINKS.iter() {
                TopLink {
                    key: "{entry.href}",
                    entry: *entry,
                    current_path: current_path.clone(),
                }
            }
        }
    }
}
