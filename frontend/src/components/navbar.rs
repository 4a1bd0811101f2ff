//! Top navigation bar and page layout.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::footer::FooterLinks;
use crate::routes::Route;
use common::search_filter::SearchFilter;

use dioxus_free_icons::icons::md_action_icons::{MdHelp, MdHome, MdInfo, MdSearch};
use dioxus_free_icons::{Icon, IconShape};


/// Shared layout: header, routed page, footer.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",


            header {
                id:"x-nav-header",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 40px;
                    height: 72px;
                    padding: 0 32px;
                    background-color: #0066CC;
                    color: white;
                    flex-shrink: 0;
                ",

                NavbarLogo{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarIconLinks{},
            },

            main {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }

            FooterLinks {}
        }

    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::ExplorePage { },
            style: "color: white; text-decoration: none; display: flex; flex-direction: column;",
            span { style: "font-size: 28px; font-weight: 700; letter-spacing: 0.02em;", "schema" }
            span { style: "font-size: 13px; font-weight: 400; opacity: 0.85;", "Il catalogo nazionale della semantica dei dati" }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        nav {
            style: "
                display:flex;
                flex-direction: row;
                gap: 24px;
                align-items: center;
            ",
            IconLink { to: Route::ExplorePage { }, icon: MdHome, label: "Esplora" }
            IconLink { to: Route::search_page_from_filter(SearchFilter::default()), icon: MdSearch, label: "Cerca" }
            IconLink { to: Route::ProjectPage { }, icon: MdInfo, label: "Il progetto" }
            IconLink { to: Route::FaqPage { }, icon: MdHelp, label: "FAQ" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            style: "color: white; text-decoration: none; display: flex; align-items: center; gap: 6px; font-size: 16px; font-weight: 600;",
            title: "{label}",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            "{label}"
        }
    }
}
