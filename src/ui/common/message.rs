//! Inline message area for form feedback

use crate::core::FormMessage;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Form message area
/// Shows a success or error message when Some, nothing when None
#[component]
pub fn FormMessageArea(
    /// Element id of the message container
    #[prop(default = "formMessage")]
    id: &'static str,
    /// Current message
    #[prop(into)]
    message: Signal<Option<FormMessage>>,
) -> impl IntoView {
    view! {
        <div id=id class="form__message" role="status" aria-live="polite">
            {move || {
                message.get().map(|msg| {
                    let (class, icon) = if msg.is_error() {
                        ("error-message", icons::ALERT_CIRCLE)
                    } else {
                        ("success-message", icons::CHECK)
                    };
                    view! {
                        <div class=class>
                            <Icon name=icon class="icon-text"/>
                            <span>{msg.text().to_string()}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
