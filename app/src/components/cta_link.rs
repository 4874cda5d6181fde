use leptos::{component, view, Children, IntoView};
use leptos_router::A;

/// Styled navigational control used for primary actions.
///
/// Pure function of its destination and label. The destination is not checked
/// for reachability: an unwired path simply falls through to the router's
/// wildcard entry.
#[component]
pub fn CtaLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <A
            href=href
            class="relative inline-flex items-center gap-2 px-5 py-2.5 rounded-xl bg-slate-900/70 border border-cyan-500/30 text-cyan-200 hover:text-white shadow-[0_0_20px_rgba(34,211,238,0.25)] hover:shadow-[0_0_35px_rgba(34,211,238,0.45)] transition-all duration-300 group"
        >
            <span class="absolute inset-0 rounded-xl bg-gradient-to-r from-cyan-500/20 to-emerald-500/20 opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none"></span>
            <span class="relative">{children()}</span>
        </A>
    }
}
