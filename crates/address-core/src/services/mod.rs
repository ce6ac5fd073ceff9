//! Service modules for business logic

pub mod address_service;

pub use address_service::AddressResolver;
