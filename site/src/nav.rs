// site navigation
//
// the sitemap is static and shared by the desktop menus, the mobile drawer and the
// footer.  entries have no identity beyond their href, and the same href may appear
// in more than one group (the design-system page is linked from several places)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub href: &'static str,
    pub description: Option<&'static str>,
}

impl NavigationEntry {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        NavigationEntry {
            label,
            href,
            description: None,
        }
    }

    pub const fn described(label: &'static str, href: &'static str, description: &'static str) -> Self {
        NavigationEntry {
            label,
            href,
            description: Some(description),
        }
    }

    // links that leave the site are rendered as plain anchors opening a new tab
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationGroup {
    pub title: &'static str,
    pub items: &'static [NavigationEntry],
}

impl NavigationGroup {
    // the mobile drawer shows a shorter list for long groups
    pub fn mobile_items(&self, limit: usize) -> &'static [NavigationEntry] {
        &self.items[..self.items.len().min(limit)]
    }

    // stable identifier used for accordion values and element ids
    pub fn slug(&self) -> String {
        self.title
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

pub const SITE_NAV: &[NavigationGroup] = &[
    NavigationGroup {
        title: "Getting Started",
        items: &[
            NavigationEntry::described("Introduction", "/", "Quick overview of the framework and its features"),
            NavigationEntry::described("Design System", "/design-system", "Comprehensive design tokens and components"),
            NavigationEntry::described("Installation", "/", "Step-by-step setup instructions"),
            NavigationEntry::described("Configuration", "/", "Environment variables and project setup"),
        ],
    },
    NavigationGroup {
        title: "Components",
        items: &[
            NavigationEntry::described("Form Elements", "/design-system#components", "Inputs, selects, checkboxes, and more"),
            NavigationEntry::described("Navigation", "/design-system#components", "Menus, breadcrumbs, and tabs"),
            NavigationEntry::described("Feedback", "/design-system#components", "Alerts, toasts, and dialogs"),
            NavigationEntry::described("Data Display", "/design-system#components", "Tables, cards, and badges"),
            NavigationEntry::described("Colors", "/design-system#colors", "Full color palette and usage"),
            NavigationEntry::described("Typography", "/design-system#typography", "Text styles and hierarchy"),
        ],
    },
    NavigationGroup {
        title: "Examples",
        items: &[
            NavigationEntry::described("About Page", "/about", "Example page with hero and content sections"),
            NavigationEntry::described("Contact Page", "/contact", "Form layout and validation patterns"),
            NavigationEntry::described("Design System", "/design-system", "Complete design system documentation"),
        ],
    },
];

pub const TOP_LINKS: &[NavigationEntry] = &[
    NavigationEntry::new("About", "/about"),
    NavigationEntry::new("Contact", "/contact"),
];

pub const CALL_TO_ACTION: NavigationEntry = NavigationEntry::new("Get Started", "/design-system");

pub const FOOTER_GROUPS: &[NavigationGroup] = &[
    NavigationGroup {
        title: "Getting Started",
        items: &[
            NavigationEntry::new("Introduction", "/"),
            NavigationEntry::new("Design System", "/design-system"),
            NavigationEntry::new("Installation", "/"),
        ],
    },
    NavigationGroup {
        title: "Resources",
        items: &[
            NavigationEntry::new("Components", "/design-system"),
            NavigationEntry::new("About", "/about"),
            NavigationEntry::new("Contact", "/contact"),
        ],
    },
    NavigationGroup {
        title: "Community",
        items: &[
            NavigationEntry::new("GitHub", "https://github.com"),
            NavigationEntry::new("Twitter", "https://twitter.com"),
            NavigationEntry::new("Discord", "https://discord.com"),
        ],
    },
];

// active link highlighting
//
// this is an exact comparison, not a prefix match: /about does not mark /about/team
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_requires_exact_match() {
        for link in TOP_LINKS {
            assert!(is_active(link.href, link.href));
        }

        assert!(is_active("/about", "/about"));
        assert!(!is_active("/contact", "/about"));
        assert!(!is_active("/", "/about"));
        assert!(!is_active("/design-system", "/about"));
        assert!(!is_active("/about/team", "/about"));

        assert!(is_active("/contact", "/contact"));
        assert!(!is_active("/about", "/contact"));
        assert!(!is_active("/contact/", "/contact"));
    }

    #[test]
    fn test_site_nav_groups() {
        let titles: Vec<_> = SITE_NAV.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Getting Started", "Components", "Examples"]);

        for group in SITE_NAV {
            assert!(!group.items.is_empty());
            for item in group.items {
                assert!(item.href.starts_with('/'));
                assert!(item.description.is_some());
            }
        }
    }

    #[test]
    fn test_mobile_items_truncate_long_groups() {
        let components = &SITE_NAV[1];
        assert_eq!(components.items.len(), 6);
        assert_eq!(components.mobile_items(4).len(), 4);
        assert_eq!(components.mobile_items(4)[3].label, "Data Display");

        let examples = &SITE_NAV[2];
        assert_eq!(examples.mobile_items(4).len(), 3);
    }

    #[test]
    fn test_external_links() {
        let entry = NavigationEntry::new("About", "/about");
        assert!(!entry.is_external());

        assert!(FOOTER_GROUPS[2].items.iter().all(|e| e.is_external()));
    }

    #[test]
    fn test_group_slug() {
        assert_eq!(SITE_NAV[0].slug(), "getting-started");
        assert_eq!(SITE_NAV[1].slug(), "components");
    }
}
