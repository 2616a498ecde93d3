use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Logo() -> Element {
    rsx! {
        Link { to: Route::Home {}, class: "logo-link",
            div { class: "logo-mark",
                svg {
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "white",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M12 2L2 7l10 5 10-5-10-5z" }
                    path { d: "M2 17l10 5 10-5" }
                    path { d: "M2 12l10 5 10-5" }
                }
            }
        }
    }
}
