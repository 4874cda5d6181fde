use leptos::{component, view, CollectView, IntoView};

use crate::components::{Hero, PageShell};

const FEATURES: [&str; 3] = ["Instant delivery", "License dashboard", "24/7 uptime"];

/// Home page: the shared shell with the hero slot filled, no title banner.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <PageShell hero=view! { <Hero/> }.into_view()>
            <section class="grid md:grid-cols-3 gap-6">
                {FEATURES
                    .iter()
                    .map(|heading| {
                        view! {
                            <div class="p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                                <h3 class="font-semibold">{*heading}</h3>
                                <p class="text-slate-400 text-sm mt-2">
                                    "Beautiful neon-themed experience with secure infrastructure."
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </PageShell>
    }
}
