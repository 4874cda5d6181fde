use leptos::{component, view, CollectView, IntoView};

use crate::components::{CtaLink, PageShell};

/// Client dashboard. Sample bots only; the Deploy/Keys actions are
/// intentionally inert anchors (see the checkout page for the same pattern).
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <PageShell title="Client dashboard" subtitle="Manage licenses, deploy keys and usage analytics.">
            <div class="grid md:grid-cols-3 gap-6">
                <div class="md:col-span-2 p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <h3 class="font-semibold mb-2">"Your bots"</h3>
                    <div class="grid sm:grid-cols-2 gap-4">
                        {(1..=3u32)
                            .map(|i| {
                                view! {
                                    <div class="bot-card p-4 rounded-xl bg-slate-900/70 border border-white/10">
                                        <div class="flex items-center justify-between">
                                            <p class="text-slate-300">{format!("Bot {i}")}</p>
                                            <span class="text-emerald-400 text-sm">"Active"</span>
                                        </div>
                                        <div class="mt-3 flex gap-2">
                                            <CtaLink href="#">"Deploy"</CtaLink>
                                            <CtaLink href="#">"Keys"</CtaLink>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <h3 class="font-semibold mb-2">"Usage"</h3>
                    <div class="h-36 rounded-lg bg-gradient-to-br from-emerald-500/10 to-cyan-500/10 border border-white/10"></div>
                </div>
            </div>
        </PageShell>
    }
}
