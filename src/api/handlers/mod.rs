//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod check;
pub mod delete;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use check::check_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
