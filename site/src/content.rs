// static page content
//
// each page shell maps these slices to repeated blocks, once per element and in order.
// icons are named and drawn by the stylesheet

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "Modern Stack",
        description: "Built with Next.js 15, React 19, and Tailwind CSS v4 for peak performance.",
        icon: "bolt",
    },
    Feature {
        title: "Design System",
        description: "Comprehensive design tokens, color system, and typography scale with light/dark themes.",
        icon: "palette",
    },
    Feature {
        title: "Supabase Ready",
        description: "Pre-configured Supabase integration with latest connection methods and best practices.",
        icon: "database",
    },
    Feature {
        title: "shadcn/ui Components",
        description: "40+ accessible, customizable UI components built with Radix UI primitives.",
        icon: "grid",
    },
    Feature {
        title: "TypeScript",
        description: "Fully typed with TypeScript for better DX and fewer runtime errors.",
        icon: "code",
    },
    Feature {
        title: "Example Pages",
        description: "Reference pages demonstrating design patterns, layouts, and component usage.",
        icon: "document",
    },
];

pub const KEY_FEATURES: &[&str] = &[
    "Next.js 15 with Turbopack",
    "Supabase integration",
    "40+ shadcn/ui components",
    "Complete design system",
    "TypeScript support",
    "Light and dark themes",
    "Responsive layouts",
    "Best practices baked in",
];

pub const TECH_STACK: &[Feature] = &[
    Feature {
        title: "Next.js",
        description: "React framework with SSR",
        icon: "nextjs",
    },
    Feature {
        title: "Supabase",
        description: "Open source Firebase alternative",
        icon: "database",
    },
    Feature {
        title: "Tailwind CSS",
        description: "Utility-first CSS framework",
        icon: "palette",
    },
    Feature {
        title: "TypeScript",
        description: "Typed JavaScript superset",
        icon: "code",
    },
];

pub const PRINCIPLES: &[Feature] = &[
    Feature {
        title: "Developer Experience",
        description: "Built with TypeScript, comprehensive documentation, and clear patterns for rapid development.",
        icon: "thumbs-up",
    },
    Feature {
        title: "Scalability",
        description: "Designed to grow with your application from prototype to production-ready system.",
        icon: "trend",
    },
    Feature {
        title: "Best Practices",
        description: "Following industry standards for code quality, accessibility, and performance.",
        icon: "check-circle",
    },
];

// design system

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub class: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

pub const PRIMARY_SWATCHES: &[Swatch] = &[
    Swatch { name: "100", class: "bg-primary", light: "#1877F2", dark: "#4A9FFF" },
    Swatch { name: "75", class: "bg-primary-75", light: "#1877F2BF", dark: "#4A9FFFBF" },
    Swatch { name: "50", class: "bg-primary-50", light: "#1877F280", dark: "#4A9FFF80" },
    Swatch { name: "25", class: "bg-primary-25", light: "#1877F240", dark: "#4A9FFF40" },
    Swatch { name: "12", class: "bg-primary-12", light: "#1877F21F", dark: "#4A9FFF1F" },
    Swatch { name: "08", class: "bg-primary-08", light: "#1877F214", dark: "#4A9FFF14" },
    Swatch { name: "05", class: "bg-primary-05", light: "#1877F20D", dark: "#4A9FFF0D" },
];

pub const TEXT_SWATCHES: &[Swatch] = &[
    Swatch { name: "Heading", class: "theme-fc-heading", light: "#262626", dark: "#FAFAFA" },
    Swatch { name: "Heading Light", class: "theme-fc-heading-light", light: "#363636", dark: "#E8E8E8" },
    Swatch { name: "Base", class: "theme-fc-base", light: "#4D4D4D", dark: "#CCCCCC" },
    Swatch { name: "Light", class: "theme-fc-light", light: "#8C8C8C", dark: "#A0A0A0" },
    Swatch { name: "Lighter", class: "theme-fc-lighter", light: "#BFBFBF", dark: "#808080" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surface {
    pub name: &'static str,
    pub class: &'static str,
    pub usage: &'static str,
}

pub const BACKGROUNDS: &[Surface] = &[
    Surface { name: "Background", class: "theme-bg-color", usage: "Page background color" },
    Surface { name: "Background Dark", class: "theme-bg-color-dark", usage: "Darker sections" },
];

pub const SURFACES: &[Surface] = &[
    Surface { name: "Foreground", class: "theme-fg-color", usage: "Cards, modals, dropdowns" },
    Surface { name: "Foreground Dark", class: "theme-fg-color-dark", usage: "Elevated surfaces" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub size: &'static str,
    pub usage: &'static str,
}

pub const HEADING_SCALE: &[Heading] = &[
    Heading { level: 1, size: "2rem (32px)", usage: "Page titles and main headings" },
    Heading { level: 2, size: "1.75rem (28px)", usage: "Section headings" },
    Heading { level: 3, size: "1.5rem (24px)", usage: "Subsection headings" },
    Heading { level: 4, size: "1.25rem (20px)", usage: "Card headings" },
    Heading { level: 5, size: "1rem (16px)", usage: "Small headings" },
    Heading { level: 6, size: "0.875rem (14px)", usage: "Overline text" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub value: &'static str,
}

pub const CONTAINER_WIDTHS: &[Token] = &[
    Token { name: "container-max-sm", value: "512px max width" },
    Token { name: "container-max-tab", value: "768px max width" },
    Token { name: "container-max-md", value: "896px max width" },
    Token { name: "container-max-lg", value: "1024px max width" },
    Token { name: "container-max-xl", value: "1280px max width" },
];

pub const RADII: &[Token] = &[
    Token { name: "theme-rounded", value: "Standard radius - 10px" },
    Token { name: "theme-rounded-sm", value: "Small radius - 6px" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCard {
    pub title: &'static str,
    pub description: &'static str,
    pub body: Option<&'static str>,
    pub action: Option<&'static str>,
    pub highlighted: bool,
}

pub const SAMPLE_CARDS: &[SampleCard] = &[
    SampleCard {
        title: "Card Title",
        description: "Card description goes here",
        body: Some("Card content with useful information."),
        action: None,
        highlighted: false,
    },
    SampleCard {
        title: "Another Card",
        description: "With different content",
        body: None,
        action: Some("Action Button"),
        highlighted: false,
    },
    SampleCard {
        title: "Highlighted Card",
        description: "With accent background",
        body: Some("Special content highlighted."),
        action: None,
        highlighted: true,
    },
];

pub const DOS: &[&str] = &[
    "Use theme utilities (theme-fc-base, bg-primary)",
    "Test in both light and dark modes",
    "Follow typography scale for consistency",
    "Use semantic color names",
    "Leverage container utilities for responsive layouts",
];

pub const DONTS: &[&str] = &[
    "Hard-code hex colors in components",
    "Skip checking the dark theme",
    "Invent one-off font sizes",
    "Nest containers inside containers",
];

// design system page sections
//
// the id doubles as the in-page anchor that the navigation links to

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocSection {
    pub id: &'static str,
    pub title: &'static str,
}

pub const COLORS: DocSection = DocSection { id: "colors", title: "Color Palette" };
pub const TYPOGRAPHY: DocSection = DocSection { id: "typography", title: "Typography Scale" };
pub const SPACING: DocSection = DocSection { id: "spacing", title: "Spacing & Layout" };
pub const COMPONENTS: DocSection = DocSection { id: "components", title: "Components" };

// in page order
pub const DESIGN_SYSTEM_SECTIONS: &[DocSection] = &[COLORS, TYPOGRAPHY, SPACING, COMPONENTS];

// contact page sidebar

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink { label: "Design System", href: "/design-system" },
    QuickLink { label: "GitHub Repository", href: "https://github.com" },
    QuickLink { label: "About Us", href: "/about" },
];

pub const SOCIAL_LINKS: &[QuickLink] = &[
    QuickLink { label: "GitHub", href: "https://github.com" },
    QuickLink { label: "Twitter", href: "https://twitter.com" },
    QuickLink { label: "Discord", href: "https://discord.com" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::SITE_NAV;
    use std::collections::HashSet;

    #[test]
    fn test_titles_are_unique_keys() {
        // the page shells key repeated blocks by title
        for list in [HOME_FEATURES, TECH_STACK, PRINCIPLES] {
            let titles: HashSet<_> = list.iter().map(|f| f.title).collect();
            assert_eq!(titles.len(), list.len());
        }

        let names: HashSet<_> = PRIMARY_SWATCHES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), PRIMARY_SWATCHES.len());
    }

    #[test]
    fn test_heading_scale_is_ordered() {
        let levels: Vec<u8> = HEADING_SCALE.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_design_system_anchors() {
        let ids: Vec<_> = DESIGN_SYSTEM_SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["colors", "typography", "spacing", "components"]);
    }

    #[test]
    fn test_nav_anchors_have_sections() {
        // every in-page link in the sitemap lands on a section of the design system page
        let anchors = SITE_NAV
            .iter()
            .flat_map(|group| group.items.iter())
            .filter_map(|entry| entry.href.split_once('#'));

        for (path, anchor) in anchors {
            assert_eq!(path, "/design-system");
            assert!(DESIGN_SYSTEM_SECTIONS.iter().any(|s| s.id == anchor), "{anchor}");
        }
    }
}
