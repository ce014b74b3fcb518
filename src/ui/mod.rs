pub mod carousel;
pub mod common;
pub mod contact_modal;
pub mod icon;
pub mod nav;
pub mod pages;
pub mod reveal;
pub mod site_client;

pub use carousel::TestimonialCarousel;
pub use contact_modal::{ContactModal, provide_contact_modal, use_contact_modal};
pub use icon::{Icon, icons};
pub use nav::NavBar;
pub use pages::{HomePage, NotFoundPage};
