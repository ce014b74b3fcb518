//! Application pages module
//!
//! - Home page (every site section on one page)
//! - Not found page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
