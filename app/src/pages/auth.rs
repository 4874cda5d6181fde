use leptos::{component, view, IntoView};

use crate::components::{AuthForm, PageShell};

/// Which face of the auth page is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Signup => "Create your account",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Signup => "Create account",
        }
    }
}

/// Login/signup page. The OAuth quick-auth links are inert anchors: the copy
/// mentions env-sourced client ids, but nothing reads them.
#[component]
pub fn Auth(mode: AuthMode) -> impl IntoView {
    view! {
        <PageShell title=mode.title() subtitle="Use Google or Discord, loaded from your local env keys.">
            <div class="grid md:grid-cols-2 gap-6">
                <div class="p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <p class="text-slate-300">"Quick auth"</p>
                    <div class="mt-4 grid gap-3">
                        <a
                            href="#"
                            class="px-4 py-3 rounded-xl bg-slate-900/70 border border-white/10 hover:border-emerald-400/50 transition"
                        >
                            "Sign in with Google (client id from .env.local)"
                        </a>
                        <a
                            href="#"
                            class="px-4 py-3 rounded-xl bg-slate-900/70 border border-white/10 hover:border-cyan-400/50 transition"
                        >
                            "Sign in with Discord (client id from .env.local)"
                        </a>
                    </div>
                </div>
                <div class="p-6 rounded-2xl bg-slate-900/60 border border-white/10">
                    <p class="text-slate-300">"Or continue with email"</p>
                    <AuthForm submit_label=mode.submit_label()/>
                </div>
            </div>
        </PageShell>
    }
}
