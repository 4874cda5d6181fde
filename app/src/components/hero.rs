use leptos::{component, create_effect, on_cleanup, store_value, view, IntoView};

use crate::components::{BodyClass, CtaLink};

/// Scene handed to the embedded viewer. The viewer itself is an opaque
/// collaborator: load failures and unsupported environments are its problem.
const HERO_SCENE_URL: &str = "https://prod.spline.design/OG17yM2eUIs8MUmA/scene.splinecode";

/// Full-bleed animated hero panel for the home page.
#[component]
pub fn Hero() -> impl IntoView {
    // Suppress horizontal overflow while the hero is on screen. Effects never
    // run during SSR, so the guard only exists in the browser; dropping it in
    // `on_cleanup` releases the class on every unmount path.
    let overflow_lock = store_value(None::<BodyClass>);
    create_effect(move |_| {
        overflow_lock.set_value(Some(BodyClass::acquire("overflow-x-hidden")));
    });
    on_cleanup(move || overflow_lock.set_value(None));

    view! {
        <section class="relative h-[80vh] min-h-[560px] w-full overflow-hidden bg-slate-950">
            <div class="absolute inset-0 bg-gradient-to-b from-slate-950 via-slate-950 to-slate-900"></div>
            <div class="absolute inset-0 pointer-events-none bg-[radial-gradient(circle_at_10%_10%,rgba(16,185,129,0.12),transparent_40%),radial-gradient(circle_at_90%_20%,rgba(59,130,246,0.10),transparent_45%)]"></div>

            <div class="absolute inset-0">
                <spline-viewer url=HERO_SCENE_URL style="width:100%;height:100%"></spline-viewer>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 h-full flex items-center">
                <div class="max-w-2xl">
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full border border-emerald-400/40 text-emerald-200 bg-emerald-500/10 mb-5">
                        <div class="w-2 h-2 rounded-full bg-emerald-400 animate-pulse"></div>
                        "Live automation bots, ready to deploy"
                    </div>
                    <h1 class="text-5xl md:text-7xl font-black tracking-tight leading-tight">
                        "Buy, deploy and manage bots in neon style"
                    </h1>
                    <p class="mt-4 text-lg text-slate-300 max-w-xl">
                        "Powerful automation for trading, scraping, moderation and more. One marketplace, instant delivery, client dashboards and secure payments."
                    </p>
                    <div class="mt-8 flex flex-wrap gap-3">
                        <CtaLink href="/shop">"Explore shop"</CtaLink>
                        <CtaLink href="/dashboard">"Client dashboard"</CtaLink>
                    </div>
                </div>
            </div>
        </section>
    }
}

// region:    --- Tests

#[cfg(test)]
mod tests {
    type TestError = Box<dyn std::error::Error>;
    type Result<T> = core::result::Result<T, TestError>; // For tests.

    use leptos::*;
    use leptos_router::Router;
    use wasm_bindgen_test::*;

    use super::Hero;

    wasm_bindgen_test_configure!(run_in_browser);

    // `mount_to` leaks its runtime, so a real unmount is not reachable from
    // the public mounting API. Building the view under a manual runtime and
    // disposing it drives the same effect/cleanup pair the router runs when
    // the home page leaves the screen.
    #[wasm_bindgen_test]
    fn overflow_lock_released_on_dispose() -> Result<()> {
        let class_list = leptos::document().body().unwrap().class_list();

        let runtime = create_runtime();
        let view = view! {
            <Router>
                <Hero/>
            </Router>
        }
        .into_view();
        assert!(
            class_list.contains("overflow-x-hidden"),
            "class applied while the hero lives"
        );

        runtime.dispose();
        assert!(
            !class_list.contains("overflow-x-hidden"),
            "no residue after disposal"
        );

        drop(view);
        Ok(())
    }
}

// endregion: --- Tests
