use crate::components::ErrorAlert;
use crate::utils::validate_email;
use crate::Error;
use leptos::{component, create_signal, event_target_value, view, IntoView, SignalGet, SignalSet};
use leptos_router::Form;

/// Email/password panel of the auth pages.
///
/// No identity provider sits behind this front end, so submission surfaces
/// `Error::AuthNotConfigured` instead of posting anywhere. The button stays
/// disabled until the email looks valid and a password was typed.
#[component]
pub fn AuthForm(submit_label: &'static str) -> impl IntoView {
    let (error, set_error) = create_signal::<Option<Error>>(None);
    let (email, set_email) = create_signal::<String>(String::new());
    let (pwd, set_pwd) = create_signal::<String>(String::new());

    let ready = move || validate_email(&email.get()) && !pwd.get().is_empty();

    view! {
        <div class="auth-form">
            <ErrorAlert error=error/>
            <Form action="" class="mt-4 grid gap-3">
                <input
                    class="px-4 py-3 rounded-xl bg-slate-950/80 border border-white/10 outline-none focus:border-emerald-400/50"
                    type="email"
                    placeholder="Email"
                    id="email-input"
                    on:input=move |ev| { set_email.set(event_target_value(&ev)) }
                    prop:value=email
                />
                <input
                    class="px-4 py-3 rounded-xl bg-slate-950/80 border border-white/10 outline-none focus:border-cyan-400/50"
                    type="password"
                    placeholder="Password"
                    id="pwd-input"
                    on:input=move |ev| { set_pwd.set(event_target_value(&ev)) }
                    prop:value=pwd
                />
                <button
                    class=move || {
                        if ready() {
                            "px-4 py-3 rounded-xl bg-gradient-to-r from-emerald-500 to-cyan-500 text-slate-950 font-bold"
                        } else {
                            "px-4 py-3 rounded-xl bg-slate-900/70 border border-white/10 text-slate-500"
                        }
                    }

                    on:click=move |_| { set_error.set(Some(Error::AuthNotConfigured)) }
                    disabled=move || !ready()
                >
                    {submit_label}
                </button>
            </Form>
        </div>
    }
}

// region:    --- Tests

#[cfg(test)]
mod tests {
    type Error = Box<dyn std::error::Error>;
    type Result<T> = core::result::Result<T, Error>; // For tests.

    use leptos::*;
    use leptos_router::Router;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::AuthForm;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn create() -> Result<()> {
        let document = leptos::document();
        let test_wrapper = document
            .create_element("section")
            .expect("Cannot create document");
        let _ = document.body().unwrap().append_child(&test_wrapper);

        mount_to(test_wrapper.clone().unchecked_into(), || {
            view! {
                <Router>
                    <AuthForm submit_label="Sign in"/>
                </Router>
            }
        });

        let input = test_wrapper
            .query_selector("#email-input")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlInputElement>();

        assert_eq!(
            input.placeholder(),
            "Email".to_string(),
            "email placeholder"
        );

        let button = test_wrapper
            .query_selector("button")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlButtonElement>();

        if let Some(btn_text) = button.text_content() {
            assert_eq!(btn_text.trim(), "Sign in".to_string());
        }
        // both fields empty => cannot submit
        assert!(button.disabled());

        test_wrapper.remove();
        Ok(())
    }
}

// endregion: --- Tests
