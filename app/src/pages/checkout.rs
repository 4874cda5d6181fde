use leptos::{component, view, CollectView, IntoView};

use crate::components::{CtaLink, PageShell};

/// Checkout page. The "Pay with PayPal" action points at `/success`, a
/// deliberately unwired destination that resolves to the router's wildcard:
/// no gateway sits behind this front end.
#[component]
pub fn Checkout() -> impl IntoView {
    view! {
        <PageShell title="Checkout" subtitle="Pay securely via PayPal. Keys loaded from local environment configuration.">
            <div class="grid md:grid-cols-3 gap-6">
                <div class="md:col-span-2 p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <h3 class="font-semibold mb-2">"Order summary"</h3>
                    <div class="space-y-3">
                        {(1..=2u32)
                            .map(|i| {
                                view! {
                                    <div class="order-line p-4 rounded-xl bg-slate-900/70 border border-white/10 flex items-center justify-between">
                                        <p class="text-slate-300">{format!("Automation Bot {i}")}</p>
                                        <span class="text-emerald-400 text-sm">"$49"</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <h3 class="font-semibold">"Payment"</h3>
                    <p class="text-slate-400 text-sm">
                        "This demo creates a server-side PayPal order using your keys."
                    </p>
                    <CtaLink href="/success">"Pay with PayPal"</CtaLink>
                </div>
            </div>
        </PageShell>
    }
}
