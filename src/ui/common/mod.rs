//! Common reusable UI components
//!
//! Building blocks shared by the page sections: modal shell, form fields and
//! the inline message area.

pub mod form;
pub mod message;
pub mod modal;

pub use form::{FormField, TextAreaField};
pub use message::FormMessageArea;
pub use modal::BaseModal;
