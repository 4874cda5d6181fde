use leptos::{component, view, CollectView, IntoView};

use crate::components::PageShell;

/// Tiles in the decorative grid. Fixed by design, not a knob.
pub const TILE_COUNT: usize = 6;

/// Generic content page: shell plus a grid of decorative tiles. Used for every
/// route without a bespoke layout, and for the router's "Not found" fallback.
#[component]
pub fn Placeholder(#[prop(into)] title: String, #[prop(into)] copy: String) -> impl IntoView {
    view! {
        <PageShell title=title subtitle=copy>
            <div class="grid md:grid-cols-3 gap-6">
                {(0..TILE_COUNT)
                    .map(|_| {
                        view! {
                            <div class="tile p-6 rounded-2xl bg-slate-900/60 border border-white/10 shadow-[0_0_20px_rgba(34,211,238,0.12)]">
                                <div class="h-36 rounded-lg bg-gradient-to-br from-emerald-500/10 to-cyan-500/10 border border-white/10 mb-4"></div>
                                <p class="text-slate-300">"Neon-ready component block"</p>
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
