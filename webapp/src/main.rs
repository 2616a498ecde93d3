#![allow(non_snake_case)]
use std::sync::LazyLock;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error, info};

use site::config::{SiteConfig, read_config};

mod common;

mod components;

mod layout;
use layout::RootLayout;

mod home;
use home::Home;

mod about;
use about::About;

mod contact;
use contact::Contact;

mod design_system;
use design_system::DesignSystem;

mod not_found;
use not_found::NotFound;

// the config file is baked in at build time; a bad file falls back to the defaults
// rather than leaving the site blank
pub static CONFIG: LazyLock<SiteConfig> =
    LazyLock::new(|| match read_config(include_str!("../site.toml")) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}, using default site config");
            SiteConfig::default()
        }
    });

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    info!({ site = CONFIG.site_name.as_str() }, "starting webapp");

    // paint the stored theme before the first render
    let theme = common::theme::load_theme();
    common::theme::apply_appearance(theme.appearance(common::theme::system_prefers_dark()));

    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RootLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/design-system")]
        DesignSystem {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::PAGE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
