use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    content::{
        BACKGROUNDS, COLORS, COMPONENTS, CONTAINER_WIDTHS, DESIGN_SYSTEM_SECTIONS, DONTS, DOS,
        HEADING_SCALE, Heading, PRIMARY_SWATCHES, RADII, SAMPLE_CARDS, SPACING, SURFACES,
        SampleCard, Surface, Swatch, TEXT_SWATCHES, TYPOGRAPHY,
    },
    page_title,
};

use crate::{CONFIG, Route};

#[derive(Clone, PartialEq, Props)]
struct SwatchProps {
    swatch: Swatch,
}

#[component]
fn PrimarySwatch(props: SwatchProps) -> Element {
    let swatch = props.swatch;

    rsx! {
        div { class: "box",
            div { class: "swatch-chip {swatch.class}" }
            p { class: "swatch-name", "Primary {swatch.name}" }
            code { class: "swatch-meta", ".{swatch.class}" }
            p { class: "swatch-meta", "Light: {swatch.light}" }
            p { class: "swatch-meta", "Dark: {swatch.dark}" }
        }
    }
}

#[component]
fn TextSwatch(props: SwatchProps) -> Element {
    let swatch = props.swatch;

    rsx! {
        div { class: "box",
            div { class: "text-chip theme-rounded {swatch.class}", "Aa" }
            p { class: "swatch-name", "{swatch.name}" }
            p { class: "swatch-meta", "{swatch.light}" }
            p { class: "swatch-meta", "{swatch.dark}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SurfaceProps {
    surface: Surface,
}

#[component]
fn SurfaceSample(props: SurfaceProps) -> Element {
    let surface = props.surface;

    rsx! {
        div { class: "box {surface.class}", style: "margin-bottom: var(--space-3);",
            p { class: "swatch-name", "{surface.name}" }
            p { class: "muted", "{surface.usage}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct HeadingProps {
    heading: Heading,
}

// heading levels render as their own element so the sample is the real thing
#[component]
fn HeadingSample(props: HeadingProps) -> Element {
    let heading = props.heading;
    let text = format!("Heading {} - {}", heading.level, heading.size);

    let sample = match heading.level {
        1 => rsx! { h1 { class: "theme-h1", "{text}" } },
        2 => rsx! { h2 { class: "theme-h2", "{text}" } },
        3 => rsx! { h3 { class: "theme-h3", "{text}" } },
        4 => rsx! { h4 { class: "theme-h4", "{text}" } },
        5 => rsx! { h5 { class: "theme-h5", "{text}" } },
        _ => rsx! { h6 { class: "theme-h6", "{text}" } },
    };

    rsx! {
        div {
            {sample}
            p { class: "muted", "{heading.usage}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SampleCardProps {
    card: SampleCard,
}

#[component]
fn SampleCardView(props: SampleCardProps) -> Element {
    let card = props.card;

    rsx! {
        div { class: if card.highlighted { "card highlighted" } else { "card" },
            div { class: "card-header",
                h4 { class: "card-title", "{card.title}" }
                p { class: "card-description", "{card.description}" }
            }
            div { class: "card-content",
                if let Some(body) = card.body {
                    p { class: "theme-fc-base", "{body}" }
                }
                if let Some(action) = card.action {
                    button { class: "btn btn-primary btn-block", r#type: "button", "{action}" }
                }
            }
        }
    }
}

#[component]
pub fn DesignSystem() -> Element {
    let title = page_title(Some("Design System"), &CONFIG.site_name);

    rsx! {
        document::Title { "{title}" }

        div { class: "theme-bg-color page-section",
            div { class: "container-max-xl",
                div { class: "centered", style: "margin-bottom: var(--space-16);",
                    h1 { class: "theme-h1 hero-title", "Design System" }
                    p { class: "hero-subtitle",
                        "A comprehensive design system built with Tailwind CSS v4, featuring consistent colors, typography, and components for both light and dark themes."
                    }
                    div { class: "hero-actions",
                        for section in DESIGN_SYSTEM_SECTIONS.iter() {
                            a {
                                key: "{section.id}",
                                class: "btn btn-ghost btn-sm",
                                href: "#{section.id}",
                                "{section.title}"
                            }
                        }
                    }
                }

                // Color palette
                section { id: COLORS.id, class: "doc-section",
                    h2 { class: "theme-h2", "{COLORS.title}" }

                    div { class: "doc-group",
                        h3 { class: "theme-h3", "Primary Brand Colors (Facebook Blue)" }
                        div { class: "grid-7",
                            for swatch in PRIMARY_SWATCHES.iter() {
                                PrimarySwatch { key: "{swatch.name}", swatch: *swatch }
                            }
                        }
                    }

                    div { class: "doc-group",
                        h3 { class: "theme-h3", "Typography Colors" }
                        div { class: "grid-5",
                            for swatch in TEXT_SWATCHES.iter() {
                                TextSwatch { key: "{swatch.name}", swatch: *swatch }
                            }
                        }
                    }

                    div { class: "doc-group",
                        h3 { class: "theme-h3", "Layout Colors" }
                        div { class: "grid-2",
                            div {
                                h4 { class: "theme-h5", style: "margin-bottom: var(--space-4);",
                                    "Backgrounds"
                                }
                                for surface in BACKGROUNDS.iter() {
                                    SurfaceSample { key: "{surface.name}", surface: *surface }
                                }
                            }
                            div {
                                h4 { class: "theme-h5", style: "margin-bottom: var(--space-4);",
                                    "Surfaces"
                                }
                                for surface in SURFACES.iter() {
                                    SurfaceSample { key: "{surface.name}", surface: *surface }
                                }
                            }
                        }
                    }
                }

                // Typography
                section { id: TYPOGRAPHY.id, class: "doc-section",
                    h2 { class: "theme-h2", "{TYPOGRAPHY.title}" }
                    div { class: "box type-scale",
                        for heading in HEADING_SCALE.iter() {
                            HeadingSample { key: "{heading.level}", heading: *heading }
                        }
                        div { style: "border-top: 1px solid var(--border); padding-top: var(--space-6);",
                            p { class: "theme-fc-base", style: "margin-bottom: var(--space-2);",
                                "Body text - The quick brown fox jumps over the lazy dog"
                            }
                            p { class: "muted",
                                "Muted text - The quick brown fox jumps over the lazy dog"
                            }
                        }
                    }
                }

                // Spacing
                section { id: SPACING.id, class: "doc-section",
                    h2 { class: "theme-h2", "{SPACING.title}" }
                    div { class: "grid-2",
                        div {
                            h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);",
                                "Container Widths"
                            }
                            for token in CONTAINER_WIDTHS.iter() {
                                div { key: "{token.name}", class: "box token-row",
                                    code { "{token.name}" }
                                    " - {token.value}"
                                }
                            }
                        }
                        div {
                            h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);",
                                "Border Radius"
                            }
                            for token in RADII.iter() {
                                div { key: "{token.name}", class: "radius-sample {token.name}",
                                    code { class: "theme-fc-heading", "{token.name}" }
                                    p { class: "muted", "{token.value}" }
                                }
                            }
                        }
                    }
                }

                // Components
                section { id: COMPONENTS.id, class: "doc-section",
                    h2 { class: "theme-h2", "{COMPONENTS.title}" }
                    div { class: "doc-group",
                        h3 { class: "theme-h3", "Cards" }
                        div { class: "grid-3",
                            for card in SAMPLE_CARDS.iter() {
                                SampleCardView { key: "{card.title}", card: *card }
                            }
                        }
                    }
                }

                // Best practices
                section { class: "doc-section",
                    h2 { class: "theme-h2", "Best Practices" }
                    div { class: "grid-2",
                        div { class: "box",
                            h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);",
                                "Do's"
                            }
                            ul { class: "check-list",
                                for item in DOS.iter() {
                                    li { key: "{item}",
                                        span { class: "icon icon-check", aria_hidden: "true" }
                                        span { class: "muted", "{item}" }
                                    }
                                }
                            }
                        }
                        div { class: "box",
                            h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);",
                                "Don'ts"
                            }
                            ul { class: "check-list",
                                for item in DONTS.iter() {
                                    li { key: "{item}",
                                        span { class: "icon icon-cross", aria_hidden: "true" }
                                        span { class: "muted", "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "box cta-box", style: "max-width: none;",
                    h2 { class: "theme-h2", style: "margin-bottom: var(--space-4);",
                        "Start Building"
                    }
                    p {
                        "Use these components and patterns to build consistent, accessible interfaces."
                    }
                    div { class: "hero-actions",
                        Link { to: Route::Home {}, class: "btn btn-primary btn-lg", "View Homepage" }
                        Link { to: Route::About {}, class: "btn btn-outline btn-lg", "Learn More" }
                    }
                }
            }
        }
    }
}
