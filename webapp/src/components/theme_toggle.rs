use dioxus::prelude::*;
use tracing::info;

use site::theme::Appearance;

use crate::common::theme::use_theme;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    let (glyph, label) = match theme.appearance() {
        Appearance::Light => ("☾", "Switch to dark theme"),
        Appearance::Dark => ("☀", "Switch to light theme"),
    };

    rsx! {
        button {
            class: "btn btn-ghost btn-icon",
            r#type: "button",
            title: "{label}",
            onclick: move |_| {
                let next = theme.toggle();
                info!({ preference = next.as_str() }, "theme changed");
            },
            span { aria_hidden: "true", "{glyph}" }
            span { class: "sr-only", "{label}" }
        }
    }
}
