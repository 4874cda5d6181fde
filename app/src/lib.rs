mod components;
mod error;
mod pages;
mod utils;

pub use error::{Error, Result};

use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Link, Script, Stylesheet, Title};
use leptos_router::{Route, Router, Routes};

use pages::{Auth, AuthMode, Checkout, Dashboard, Home, OwnerDashboard, Placeholder, Shop};

/// Root component holding the route table.
///
/// An ordered list of (path, page) pairs consumed by the router's first-match
/// dispatcher. The `fallback` is the single wildcard entry and renders the
/// "Not found" placeholder for anything not listed below.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/asset.css"/>
        <Link rel="shortcut icon" type_="image/svg+xml" href="/favicon.svg"/>
        // Opaque 3D viewer used by the home hero (web component)
        <Script type_="module" src="https://unpkg.com/@splinetool/viewer/build/spline-viewer.js"/>
        <Title text="botbuy — bot marketplace"/>
        <Router fallback=not_found>
            <Routes>
                <Route path="/" view=Home/>
                <Route path="/shop" view=Shop/>
                <Route path="/dashboard" view=Dashboard/>
                <Route path="/owner" view=OwnerDashboard/>
                <Route path="/checkout" view=Checkout/>
                <Route path="/login" view=|| view! { <Auth mode=AuthMode::Login/> }/>
                <Route path="/signup" view=|| view! { <Auth mode=AuthMode::Signup/> }/>
                <Route
                    path="/about"
                    view=|| view! { <Placeholder title="About us" copy="Crafting next-gen automation with care."/> }
                />
                <Route
                    path="/pricing"
                    view=|| view! { <Placeholder title="Pricing" copy="Simple plans for teams and pros."/> }
                />
                <Route
                    path="/docs"
                    view=|| view! { <Placeholder title="Docs" copy="Guides, API and SDK."/> }
                />
                <Route
                    path="/blog"
                    view=|| view! { <Placeholder title="Blog" copy="Updates from the bot frontier."/> }
                />
                <Route
                    path="/contact"
                    view=|| view! { <Placeholder title="Contact" copy="We're here to help 24/7."/> }
                />
                <Route
                    path="/privacy"
                    view=|| view! { <Placeholder title="Privacy" copy="Your data, your rules."/> }
                />
                <Route
                    path="/terms"
                    view=|| view! { <Placeholder title="Terms" copy="The legal stuff, made simple."/> }
                />
                <Route
                    path="/status"
                    view=|| view! { <Placeholder title="Status" copy="Systems all green."/> }
                />
            </Routes>
        </Router>
    }
}

fn not_found() -> leptos::View {
    view! { <Placeholder title="Not found" copy="The page you're looking for doesn't exist."/> }
        .into_view()
}

// region:    --- Tests


// endregion: --- Tests
