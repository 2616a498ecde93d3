use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    content::{Feature, KEY_FEATURES, PRINCIPLES, TECH_STACK},
    page_title,
};

use crate::{CONFIG, Route};

#[derive(Clone, PartialEq, Props)]
struct TechCardProps {
    tech: Feature,
}

#[component]
fn TechCard(props: TechCardProps) -> Element {
    let tech = props.tech;

    rsx! {
        div { class: "box centered",
            div { class: "icon icon-tile large icon-{tech.icon}" }
            h3 { class: "theme-h5", style: "margin-bottom: var(--space-2);", "{tech.title}" }
            p { class: "muted", "{tech.description}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PrincipleProps {
    principle: Feature,
}

#[component]
fn Principle(props: PrincipleProps) -> Element {
    let principle = props.principle;

    rsx! {
        div { class: "centered",
            div { class: "icon icon-tile large round icon-{principle.icon}" }
            h3 { class: "theme-h4 feature-title", "{principle.title}" }
            p { class: "feature-desc", "{principle.description}" }
        }
    }
}

#[component]
pub fn About() -> Element {
    let title = page_title(Some("About"), &CONFIG.site_name);

    rsx! {
        document::Title { "{title}" }

        div { class: "theme-bg-color",
            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { class: "theme-h1 hero-title", "About Our Framework" }
                        p { class: "hero-subtitle",
                            "A comprehensive starter built with modern tools and best practices for rapid application development."
                        }
                    }
                }
                div { class: "hero-glow right" }
            }

            section { class: "page-section",
                div { class: "container-max-lg",
                    div { class: "split",
                        div {
                            h2 { class: "theme-h2", style: "margin-bottom: var(--space-4);",
                                "Built for Developers"
                            }
                            p { class: "theme-fc-base",
                                "This framework was created to streamline the development process for Next.js applications that use Supabase as their backend. It includes everything you need to get started quickly while maintaining flexibility and scalability."
                            }
                            p { class: "theme-fc-light",
                                "Whether you're building a SaaS platform, a content management system, or a data-driven application, this framework provides the foundation you need with best practices baked in."
                            }
                        }
                        div { class: "box bg-primary-05",
                            h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);",
                                "Key Features"
                            }
                            ul { class: "check-list",
                                for feature in KEY_FEATURES.iter() {
                                    li { key: "{feature}",
                                        span { class: "icon icon-check", aria_hidden: "true" }
                                        span { "{feature}" }
                                    }
                                }
                            }
                        }
                    }

                    div { style: "margin-bottom: var(--space-20);",
                        h2 { class: "theme-h2 section-title", "Technology Stack" }
                        div { class: "grid-4",
                            for tech in TECH_STACK.iter() {
                                TechCard { key: "{tech.title}", tech: *tech }
                            }
                        }
                    }

                    div { class: "box theme-bg-color-dark cta-box",
                        h2 { class: "theme-h2", style: "margin-bottom: var(--space-4);",
                            "Comprehensive Design System"
                        }
                        p {
                            "Every component, color, and typography choice is documented and consistent. Built with Tailwind CSS v4 and designed for both light and dark themes."
                        }
                        Link {
                            to: Route::DesignSystem {},
                            class: "btn btn-primary btn-lg",
                            "Explore Design System"
                        }
                    }
                }
            }

            section { class: "page-section tinted",
                div { class: "container",
                    h2 { class: "theme-h2 section-title", "Our Principles" }
                    div { class: "grid-3",
                        for principle in PRINCIPLES.iter() {
                            Principle { key: "{principle.title}", principle: *principle }
                        }
                    }
                }
            }
        }
    }
}
