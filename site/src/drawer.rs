use tracing::debug;

// accordion
//
// single-expansion and collapsible: at most one section is expanded, opening a section
// collapses the others, and activating the expanded section collapses it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn is_expanded(&self, section: usize) -> bool {
        self.expanded == Some(section)
    }

    pub fn toggle(&mut self, section: usize) {
        self.expanded = match self.expanded {
            Some(current) if current == section => None,
            _ => Some(section),
        };
    }
}

// mobile navigation drawer
//
// owned by the mobile nav component for as long as it is mounted.  the drawer closes
// on every link activation, on the close button and on overlay dismissal; the
// accordion keeps its selection while the drawer is hidden
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
    accordion: Accordion,
}

impl MobileNav {
    pub fn new() -> Self {
        MobileNav::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    // change callback for the controlled sheet; the trigger, the close button and the
    // overlay all go through here
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle_section(&mut self, section: usize) {
        self.accordion.toggle(section);
    }

    // a leaf link was activated: close the drawer and hand the href to the router
    pub fn activate<'a>(&mut self, href: &'a str) -> &'a str {
        debug!({ href = href }, "mobile navigation link activated");
        self.open = false;
        href
    }
}

// desktop dropdown
//
// hover, focus and click all reveal the list.  none of them hide it again, so a click
// landing right after the hover that opened the menu leaves it open; only the pointer
// or focus leaving the menu closes it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn reveal(&mut self) {
        self.open = true;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{CALL_TO_ACTION, SITE_NAV, TOP_LINKS};

    #[test]
    fn test_drawer_starts_closed() {
        let nav = MobileNav::new();
        assert!(!nav.is_open());
        for section in 0..SITE_NAV.len() {
            assert!(!nav.accordion().is_expanded(section));
        }
    }

    #[test]
    fn test_every_link_closes_drawer() {
        let links = SITE_NAV
            .iter()
            .flat_map(|group| group.items.iter())
            .chain(TOP_LINKS.iter())
            .chain(std::iter::once(&CALL_TO_ACTION));

        for entry in links {
            let mut nav = MobileNav::new();
            nav.set_open(true);
            assert!(nav.is_open());

            let target = nav.activate(entry.href);
            assert_eq!(target, entry.href);
            assert!(!nav.is_open());
        }
    }

    #[test]
    fn test_close_and_dismiss() {
        let mut nav = MobileNav::new();
        nav.set_open(true);
        assert!(nav.is_open());
        nav.set_open(false);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_single_expansion() {
        let mut nav = MobileNav::new();

        // "Getting Started", then "Components"
        nav.toggle_section(0);
        assert!(nav.accordion().is_expanded(0));

        nav.toggle_section(1);
        assert!(nav.accordion().is_expanded(1));
        assert!(!nav.accordion().is_expanded(0));
        assert!(!nav.accordion().is_expanded(2));
    }

    #[test]
    fn test_expanded_section_collapses() {
        let mut accordion = Accordion::default();
        accordion.toggle(2);
        accordion.toggle(2);
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn test_selection_survives_hiding() {
        let mut nav = MobileNav::new();
        nav.set_open(true);
        nav.toggle_section(2);
        nav.activate("/about");

        nav.set_open(true);
        assert!(nav.accordion().is_expanded(2));
    }

    #[test]
    fn test_dropdown_click_after_hover_stays_open() {
        let mut menu = Dropdown::default();
        assert!(!menu.is_open());

        // pointer (or focus) enters, then the trigger is activated
        menu.reveal();
        menu.reveal();
        assert!(menu.is_open());

        menu.hide();
        assert!(!menu.is_open());
    }
}
