use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::content::{Feature, HOME_FEATURES};

use crate::{CONFIG, Route};

#[derive(Clone, PartialEq, Props)]
pub struct FeatureCardProps {
    feature: Feature,
}

#[component]
pub fn FeatureCard(props: FeatureCardProps) -> Element {
    let feature = props.feature;

    rsx! {
        div { class: "box",
            div { class: "icon icon-tile icon-{feature.icon}" }
            h3 { class: "theme-h4 feature-title", "{feature.title}" }
            p { class: "feature-desc", "{feature.description}" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Title { "{CONFIG.site_name}" }

        div { class: "theme-bg-color",
            // Hero section
            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { class: "theme-h1 hero-title", "{CONFIG.site_name}" }
                        p { class: "hero-subtitle",
                            "A comprehensive starter framework with a complete design system, shadcn/ui components, and best practices for building modern web applications."
                        }
                        div { class: "hero-actions",
                            Link {
                                to: Route::DesignSystem {},
                                class: "btn btn-primary btn-lg",
                                "View Design System"
                            }
                            Link { to: Route::About {}, class: "btn btn-outline btn-lg", "Learn More" }
                        }
                    }
                }
                div { class: "hero-glow" }
            }

            // Features section
            section { class: "page-section tinted",
                div { class: "container",
                    h2 { class: "theme-h2 section-title", "What's Included" }
                    div { class: "grid-3",
                        for feature in HOME_FEATURES.iter() {
                            FeatureCard { key: "{feature.title}", feature: *feature }
                        }
                    }
                }
            }

            // Call to action
            section { class: "page-section",
                div { class: "container",
                    div { class: "box cta-box",
                        h2 { class: "theme-h2", style: "margin-bottom: var(--space-4);",
                            "Ready to Get Started?"
                        }
                        p { "Clone this repository and start building your next great application." }
                        div { class: "hero-actions",
                            Link {
                                to: Route::DesignSystem {},
                                class: "btn btn-primary btn-lg",
                                "Explore Design System"
                            }
                            Link {
                                to: Route::Contact {},
                                class: "btn btn-outline btn-lg",
                                "Contact Us"
                            }
                        }
                    }
                }
            }
        }
    }
}
