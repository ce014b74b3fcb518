use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input bound to a value signal
#[component]
pub fn FormField(
    /// Element id and form name of the input
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "on")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="form__input"
                class:form__input--invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Labelled text area bound to a value signal
#[component]
pub fn TextAreaField(
    /// Element id and form name of the text area
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <textarea
                id=id
                name=id
                class="form__input form__textarea"
                class:form__input--invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.as_ref().and_then(|e| e.get()).map(|err| view! {
            <div class="form__field-error">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}
