use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use site::page_title;

use crate::{CONFIG, Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    warn!({ path = path.as_str() }, "no route matched");

    let title = page_title(Some("Page not found"), &CONFIG.site_name);

    rsx! {
        document::Title { "{title}" }

        div { class: "container not-found",
            h1 { class: "theme-h1", style: "margin-bottom: var(--space-4);", "Page not found" }
            p { class: "muted", style: "margin-bottom: var(--space-8);",
                "Nothing lives at {path}."
            }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to the homepage" }
        }
    }
}
