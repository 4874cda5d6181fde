use leptos::{component, view, CollectView, IntoView};

use crate::components::{CtaLink, PageShell};

/// Size of the sample catalogue. Every card is a literal stand-in, not a
/// product record.
pub const SAMPLE_PRODUCT_COUNT: u32 = 9;

#[component]
pub fn Shop() -> impl IntoView {
    view! {
        <PageShell title="Shop" subtitle="Browse bots by category, rating and use-case.">
            <div class="grid md:grid-cols-3 gap-6">
                {(1..=SAMPLE_PRODUCT_COUNT)
                    .map(|id| {
                        view! {
                            <div class="product-card p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                                <div class="h-40 rounded-lg bg-gradient-to-br from-emerald-500/15 to-cyan-500/15 border border-white/10 mb-4"></div>
                                <h3 class="text-lg font-semibold">{format!("Automation Bot #{id}")}</h3>
                                <p class="text-slate-400 text-sm mt-1">
                                    "High-performance, easy setup, instant license."
                                </p>
                                <div class="mt-4 flex items-center justify-between">
                                    <span class="text-emerald-300 font-bold">"$49"</span>
                                    <CtaLink href="/checkout">"Buy"</CtaLink>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageShell>
    }
}

// region:    --- Tests


// endregion: --- Tests
