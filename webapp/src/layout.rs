use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::theme::use_theme_provider;
use crate::components::{footer::Footer, header::Header, toaster::Toaster};

// root layout
//
// owns the theme context for everything below it, and hosts the toaster so any page
// can raise a notification
#[component]
pub fn RootLayout() -> Element {
    use_theme_provider();

    rsx! {
        Header {}
        main { Outlet::<Route> {} }
        Footer {}
        Toaster {}
    }
}
