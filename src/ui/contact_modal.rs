//! Contact modal: form fields, inline validation and submission through
//! the server relay

use leptos::prelude::*;

use crate::core::ContactFormState;
use crate::core::contact::Field;
use crate::ui::common::{BaseModal, FormField, FormMessageArea, TextAreaField};

/// Open/closed state of the contact modal, shared between the trigger
/// buttons on the page and the modal itself
#[derive(Clone, Copy)]
pub struct ContactModalContext {
    pub is_open: RwSignal<bool>,
}

impl ContactModalContext {
    pub fn open(&self) {
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }
}

pub fn provide_contact_modal() -> ContactModalContext {
    let ctx = ContactModalContext {
        is_open: RwSignal::new(false),
    };
    provide_context(ctx);
    ctx
}

pub fn use_contact_modal() -> ContactModalContext {
    use_context::<ContactModalContext>().expect("ContactModalContext should be provided")
}

/// Button that opens the contact modal
#[component]
pub fn ContactTrigger(
    #[prop(default = "openContactModal")] id: &'static str,
    #[prop(default = "btn btn--primary")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let modal = use_contact_modal();

    view! {
        <button id=id class=class type="button" on:click=move |_| modal.open()>
            {children()}
        </button>
    }
}

#[component]
pub fn ContactModal() -> impl IntoView {
    let modal = use_contact_modal();
    let state = RwSignal::new(ContactFormState::new());

    let on_close = Callback::new(move |_: ()| {
        modal.close();
        state.update(ContactFormState::clear_message);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = match state.try_update(ContactFormState::begin_submit).flatten() {
            Some(Ok(form)) => form,
            // Validation message is already in the message area
            Some(Err(_)) | None => return,
        };

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::ContactSink;
            use crate::ui::site_client::RelayContactSink;
            use leptos::task::spawn_local;

            spawn_local(async move {
                let result = RelayContactSink.submit(&form).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("Contact submission failed: {}", e);
                }
                state.update(|s| s.finish_submit(result));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = form;
        }
    };

    view! {
        <BaseModal
            id="contactModal"
            title="Get in Touch".to_string()
            subtitle="Tell us about your project and we'll get back to you.".to_string()
            is_open=modal.is_open.into()
            on_close=on_close
        >
            <form id="contactForm" class="form" novalidate=true on:submit=on_submit>
                <FormField
                    id="name"
                    label="Name"
                    required=true
                    placeholder="Your name"
                    autocomplete="name"
                    value=Signal::derive(move || state.with(|s| s.form.name.clone()))
                    error=Signal::derive(move || state.with(|s| s.field_error(Field::Name)))
                    on_input=Callback::new(move |v: String| state.update(|s| s.form.name = v))
                />
                <FormField
                    id="email"
                    label="Email"
                    required=true
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    value=Signal::derive(move || state.with(|s| s.form.email.clone()))
                    error=Signal::derive(move || state.with(|s| s.field_error(Field::Email)))
                    on_input=Callback::new(move |v: String| state.update(|s| s.form.email = v))
                />
                <FormField
                    id="phone"
                    label="Phone"
                    input_type="tel"
                    placeholder="(555) 123-4567"
                    autocomplete="tel"
                    value=Signal::derive(move || state.with(|s| s.form.phone.clone()))
                    error=Signal::derive(move || state.with(|s| s.field_error(Field::Phone)))
                    on_input=Callback::new(move |v: String| state.update(|s| s.set_phone(&v)))
                />
                <TextAreaField
                    id="message"
                    label="Message"
                    required=true
                    placeholder="How can we help?"
                    value=Signal::derive(move || state.with(|s| s.form.message.clone()))
                    error=Signal::derive(move || state.with(|s| s.field_error(Field::Message)))
                    on_input=Callback::new(move |v: String| state.update(|s| s.form.message = v))
                />

                <FormMessageArea message=Signal::derive(move || state.with(|s| s.message().cloned()))/>

                <button
                    type="submit"
                    class="btn btn--primary form__submit"
                    disabled=move || state.with(|s| !s.can_submit())
                >
                    {move || if state.with(ContactFormState::is_submitting) { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </BaseModal>
    }
}
