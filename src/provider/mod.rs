pub mod candidates;

use crate::{
    model::{provider, server::ServerConfig},
    ServerConfigProvider,
};

impl ServerConfigProvider for Option<ServerConfig> {
    fn get_if_unique(&self) -> Result<Option<ServerConfig>, provider::Error> {
        Ok(self.clone())
    }
}

impl ServerConfigProvider for ServerConfig {
    fn get_if_unique(&self) -> Result<Option<ServerConfig>, provider::Error> {
        Ok(Some(self.clone()))
    }
}
