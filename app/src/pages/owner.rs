use leptos::{component, view, CollectView, IntoView};

use crate::components::PageShell;

const METRICS: [(&str, &str); 4] = [
    ("Revenue", "$18,420"),
    ("Orders", "329"),
    ("Conversion", "4.7%"),
    ("Refunds", "2"),
];

#[component]
pub fn OwnerDashboard() -> impl IntoView {
    view! {
        <PageShell title="Owner dashboard" subtitle="Revenue, orders, product controls and customer tickets.">
            <div class="grid md:grid-cols-4 gap-6">
                {METRICS
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="metric-card p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                                <p class="text-slate-400 text-sm">{*label}</p>
                                <p class="text-2xl font-bold mt-1">{*value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="md:col-span-2 p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <h3 class="font-semibold mb-2">"Recent orders"</h3>
                    <div class="space-y-3">
                        {(1..=4u32)
                            .map(|i| {
                                view! {
                                    <div class="p-4 rounded-xl bg-slate-900/70 border border-white/10 flex items-center justify-between">
                                        <p class="text-slate-300">{format!("Order #{}", 1000 + i)}</p>
                                        <span class="text-emerald-400 text-sm">"Paid"</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="md:col-span-2 p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <h3 class="font-semibold mb-2">"Products"</h3>
                    <div class="grid sm:grid-cols-2 gap-3">
                        {(1..=4u32)
                            .map(|i| {
                                view! {
                                    <div class="p-3 rounded-xl bg-slate-900/70 border border-white/10">
                                        <p>{format!("Automation Bot {i}")}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </PageShell>
    }
}
