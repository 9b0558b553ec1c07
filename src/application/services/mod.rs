//! Business logic services for the application layer.

pub mod mapping_service;
pub mod redirect_service;

pub use mapping_service::MappingService;
pub use redirect_service::RedirectService;
