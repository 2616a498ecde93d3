use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::nav::CALL_TO_ACTION;

use crate::components::{
    logo::Logo, mobile_nav::MobileNav, navigation::DesktopNav, theme_toggle::ThemeToggle,
};
use crate::{CONFIG, Route};

#[component]
pub fn Header() -> Element {
    let short_name = CONFIG
        .site_name
        .rsplit(' ')
        .next()
        .unwrap_or(CONFIG.site_name.as_str());

    rsx! {
        header { class: "site-header",
            div { class: "container",
                div { class: "header-bar",
                    div { class: "brand",
                        Logo {}
                        Link { to: Route::Home {}, class: "brand-name", "{short_name}" }
                    }

                    DesktopNav {}

                    div { class: "header-actions",
                        ThemeToggle {}
                        Link {
                            to: CALL_TO_ACTION.href,
                            class: "btn btn-primary btn-sm header-cta",
                            "{CALL_TO_ACTION.label}"
                        }
                        MobileNav {}
                    }
                }
            }
        }
    }
}
