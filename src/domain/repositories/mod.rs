//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod mapping_repository;

pub use mapping_repository::{DeleteFilter, MappingRepository, StoreError};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
