//! Client modules for external services

pub mod remote_parser;

pub use remote_parser::{RemoteAddressParser, RemoteParserClient};
