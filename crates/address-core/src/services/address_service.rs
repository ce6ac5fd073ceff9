//! Address resolution: remote parser first, local parser as fallback

use crate::clients::{RemoteAddressParser, RemoteParserClient};
use crate::config::AddressConfig;
use crate::error::Result;
use crate::parser::AddressParser;
use crate::validation::validate;
use address_types::{ParseOutcome, ParseSource, ParsedAddress};
use std::sync::Arc;

pub struct AddressResolver {
    parser: AddressParser,
    remote: Option<Arc<dyn RemoteAddressParser>>,
}

impl AddressResolver {
    /// Local parsing only
    pub fn new(parser: AddressParser) -> Self {
        Self { parser, remote: None }
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteAddressParser>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Build from configuration; the remote client is only created when enabled
    pub fn from_config(config: &AddressConfig) -> Result<Self> {
        let resolver = Self::new(AddressParser::new(config.parser.clone()));
        match config.active_remote() {
            Some(remote) => {
                log::info!("Remote address parser enabled at {}", remote.base_url);
                Ok(resolver.with_remote(Arc::new(RemoteParserClient::new(remote)?)))
            }
            None => Ok(resolver),
        }
    }

    pub fn parser(&self) -> &AddressParser {
        &self.parser
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Parse `text` and validate the result. Never fails: remote errors fall
    /// back to the local parser.
    pub async fn resolve(&self, text: &str) -> ParseOutcome {
        let (address, source) = match &self.remote {
            Some(remote) => match remote.parse_remote(text).await {
                Ok(address) => {
                    log::info!("Address parsed remotely");
                    (address, ParseSource::Remote)
                }
                Err(e) => {
                    log::warn!("Remote address parsing failed, using local parser: {}", e);
                    (self.parser.parse(text), ParseSource::Local)
                }
            },
            None => (self.parser.parse(text), ParseSource::Local),
        };

        Self::outcome(address, source)
    }

    /// Local parse without touching the network
    pub fn resolve_local(&self, text: &str) -> ParseOutcome {
        Self::outcome(self.parser.parse(text), ParseSource::Local)
    }

    fn outcome(address: ParsedAddress, source: ParseSource) -> ParseOutcome {
        let validation = validate(&address);
        log::debug!(
            "Resolved address via {:?}: {} fields, valid={}",
            source,
            address.recognized_fields(),
            validation.is_valid
        );
        ParseOutcome {
            address,
            validation,
            source,
        }
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new(AddressParser::default())
    }
}
