//! Address Core Library
//!
//! Turns pasted Chinese shipping text into structured address fields.
//! Contains the local parser, validation, formatting and the optional
//! remote parse client.

pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod gazetteer;
pub mod parser;
pub mod services;
pub mod validation;

// Re-export main types for easy access
pub use config::{AddressConfig, MaskedPhonePolicy, ParserConfig, RemoteParserConfig};
pub use error::{AddressError, Result};

pub use address_types::{ParseOutcome, ParseSource, ParsedAddress, ValidationReport};

pub use clients::{RemoteAddressParser, RemoteParserClient};
pub use format::{format_address, full_address, is_recognized};
pub use parser::{AddressParser, ParseTrace};
pub use services::AddressResolver;
pub use validation::validate;
