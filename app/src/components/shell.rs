use leptos::{component, view, Children, CollectView, IntoView, View};
use leptos_router::A;

use crate::components::CtaLink;
use crate::utils::current_year;

/// Header navigation, in display order.
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("Shop", "/shop"),
    ("About", "/about"),
    ("Pricing", "/pricing"),
    ("Docs", "/docs"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Footer legal links.
pub const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Privacy", "/privacy"),
    ("Terms", "/terms"),
    ("Status", "/status"),
];

/// Shared page chrome: header, optional full-bleed hero slot, optional title
/// banner, content slot, footer. Every page renders through this component;
/// the home page is the only one filling the `hero` slot.
#[component]
pub fn PageShell(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] hero: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page min-h-screen bg-slate-950 text-slate-100">
            <header class="sticky top-0 z-40 backdrop-blur bg-slate-950/70 border-b border-white/10">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <A href="/" class="flex items-center gap-3">
                        <div class="w-9 h-9 rounded-lg bg-gradient-to-br from-emerald-400 to-cyan-500 shadow-[0_0_25px_rgba(16,185,129,0.6)]"></div>
                        <span class="text-xl font-black tracking-tight">botbuy</span>
                    </A>
                    <nav class="hidden md:flex items-center gap-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <A
                                        href=*href
                                        class="px-4 py-2 text-sm text-slate-300 hover:text-white/90 transition-colors"
                                    >
                                        {*label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center gap-2">
                        <CtaLink href="/login">"Log in"</CtaLink>
                        <CtaLink href="/signup">"Sign up"</CtaLink>
                    </div>
                </div>
            </header>

            {hero}

            {title
                .map(|title| {
                    view! {
                        <section class="relative overflow-hidden">
                            <div class="absolute inset-0 bg-[radial-gradient(circle_at_20%_20%,rgba(16,185,129,0.15),transparent_40%),radial-gradient(circle_at_80%_0%,rgba(34,211,238,0.1),transparent_40%)] pointer-events-none"></div>
                            <div class="max-w-7xl mx-auto px-6 py-14">
                                <h1 class="text-4xl md:text-6xl font-black tracking-tight mb-4">{title}</h1>
                                {subtitle
                                    .map(|subtitle| {
                                        view! { <p class="text-slate-300 text-lg max-w-3xl">{subtitle}</p> }
                                    })}
                            </div>
                        </section>
                    }
                })}

            <main class="max-w-7xl mx-auto px-6 py-10">{children()}</main>

            <footer class="border-t border-white/10 mt-20">
                <div class="max-w-7xl mx-auto px-6 py-10 text-sm text-slate-400 flex flex-col md:flex-row gap-4 justify-between">
                    <p class="copyright">"© " {current_year()} " botbuy. All rights reserved."</p>
                    <div class="flex gap-4">
                        {LEGAL_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <A href=*href class="hover:text-white/80">
                                        {*label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </footer>
        </div>
    }
}

// region:    --- Tests

#[cfg(test)]
mod tests {
    type Error = Box<dyn std::error::Error>;
    type Result<T> = core::result::Result<T, Error>; // For tests.

    use super::*;
    use chrono::Datelike;
    use leptos::*;
    use leptos_router::Router;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[test]
    fn test_nav_and_legal_tables() -> Result<()> {
        assert_eq!(6, NAV_ITEMS.len());
        assert_eq!(3, LEGAL_LINKS.len());
        // every destination is an absolute in-app path
        for (_, href) in NAV_ITEMS.iter().chain(LEGAL_LINKS.iter()) {
            assert!(href.starts_with('/'), "relative destination: {href}");
        }
        Ok(())
    }

    #[wasm_bindgen_test]
    fn shell_chrome() -> Result<()> {
        let document = leptos::document();
        let test_wrapper = document
            .create_element("section")
            .expect("Cannot create document");
        let _ = document.body().unwrap().append_child(&test_wrapper);

        mount_to(test_wrapper.clone().unchecked_into(), || {
            view! {
                <Router>
                    <PageShell title="Shop" subtitle="Browse bots.">
                        <p id="content-slot">"hello"</p>
                    </PageShell>
                </Router>
            }
        });

        // single top-level page container
        assert_eq!(1, test_wrapper.query_selector_all(".page").unwrap().length());

        // six nav links in the header
        assert_eq!(6, test_wrapper.query_selector_all("nav a").unwrap().length());

        // banner shows the supplied title
        let h1 = test_wrapper.query_selector("h1").unwrap().unwrap();
        assert_eq!(Some("Shop".to_string()), h1.text_content());

        // footer year is the current calendar year
        let copyright = test_wrapper.query_selector(".copyright").unwrap().unwrap();
        let year = chrono::Utc::now().year().to_string();
        assert!(
            copyright.text_content().unwrap_or_default().contains(&year),
            "footer year"
        );

        // three legal links in the footer
        assert_eq!(
            3,
            test_wrapper.query_selector_all("footer a").unwrap().length()
        );

        // content slot reaches the main area
        assert!(test_wrapper
            .query_selector("main #content-slot")
            .unwrap()
            .is_some());

        test_wrapper.remove();
        Ok(())
    }

    #[wasm_bindgen_test]
    fn shell_without_title_has_no_banner() -> Result<()> {
        let document = leptos::document();
        let test_wrapper = document
            .create_element("section")
            .expect("Cannot create document");
        let _ = document.body().unwrap().append_child(&test_wrapper);

        mount_to(test_wrapper.clone().unchecked_into(), || {
            view! {
                <Router>
                    <PageShell>
                        <p>"content only"</p>
                    </PageShell>
                </Router>
            }
        });

        assert!(test_wrapper.query_selector("h1").unwrap().is_none());

        test_wrapper.remove();
        Ok(())
    }
}

// endregion: --- Tests
