use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with overlay, header and close button
#[component]
pub fn BaseModal(
    /// Element id of the overlay
    id: &'static str,
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            id=id
            class=move || {
                if is_open.get() {
                    "modal modal--open"
                } else {
                    "modal"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                // Only clicks on the overlay itself, not bubbling from the dialog
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("modal__overlay") {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class="modal__overlay"></div>
            <div class="modal__dialog" role="dialog" aria-modal="true">
                <div class="modal__header">
                    <div>
                        <h3 class="modal__title">{title}</h3>
                        {subtitle.map(|s| view! { <p class="modal__subtitle">{s}</p> })}
                    </div>
                    <button
                        class="modal__close"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X/>
                    </button>
                </div>

                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
