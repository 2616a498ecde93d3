// target-independent pieces of the site
//
// everything here compiles and tests on the host; the webapp wires these into
// components and browser storage
pub mod config;
pub mod contact;
pub mod content;
pub mod drawer;
pub mod nav;
pub mod notify;
pub mod theme;

// page titles
//
// the document title is "<page> | <site name>", except on the home page
pub fn page_title(page: Option<&str>, site_name: &str) -> String {
    match page {
        Some(page) => format!("{page} | {site_name}"),
        None => site_name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(None, "Framework"), "Framework");
        assert_eq!(page_title(Some("About"), "Framework"), "About | Framework");
    }
}
