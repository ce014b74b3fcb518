//! Core domain models and logic for the marketing site
//!
//! Everything here is free of DOM access so it can be unit tested natively;
//! the `ui` module wires it to the page.

#[cfg(feature = "ssr")]
pub mod api;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
#[cfg(feature = "ssr")]
pub mod contact_sink;
pub mod navigation;
pub mod protocol;
mod testimonials;

pub use carousel::{Carousel, CarouselCommand, CarouselStatus};
pub use contact::{
    Ack, ContactForm, ContactFormState, ContactSink, ContactSubmission, FormMessage,
    SubmitError, ValidationError,
};
pub use testimonials::*;
