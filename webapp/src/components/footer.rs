use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::nav::{FOOTER_GROUPS, NavigationEntry};

use crate::CONFIG;
use crate::common::current_year;

#[derive(Clone, PartialEq, Props)]
struct FooterLinkProps {
    entry: NavigationEntry,
}

#[component]
fn FooterLink(props: FooterLinkProps) -> Element {
    let entry = props.entry;

    rsx! {
        li {
            if entry.is_external() {
                a {
                    class: "footer-link",
                    href: entry.href,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{entry.label}"
                }
            } else {
                Link { to: entry.href, class: "footer-link", "{entry.label}" }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h3 { class: "theme-h5", style: "margin-bottom: var(--space-4);",
                            "Next.js + Supabase"
                        }
                        p { class: "muted", "{CONFIG.tagline}" }
                    }
                    for group in FOOTER_GROUPS.iter() {
                        div { key: "{group.title}",
                            h4 { "{group.title}" }
                            ul {
                                for entry in group.items.iter() {
                                    FooterLink { key: "{entry.label}", entry: *entry }
                                }
                            }
                        }
                    }
                }
                div { class: "footer-bottom",
                    "© {year} {CONFIG.site_name}. Built with ❤️ for developers."
                }
            }
        }
    }
}
