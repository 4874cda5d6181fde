use crate::Error;
use leptos::{component, view, IntoView, ReadSignal, SignalGet};

#[component]
pub fn ErrorAlert(error: ReadSignal<Option<Error>>) -> impl IntoView {
    move || {
        if let Some(error) = error.get() {
            view! {
                <div class="bg-red-500/10 border border-red-400/40 text-red-200 p-3 text-center rounded-xl mb-4">
                    {error.user_message()}
                </div>
            }
        } else {
            // TODO: change this to avoid a blank space
            view! { <div></div> }
        }
    }
}
