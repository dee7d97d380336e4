pub mod binder;
pub mod model;
pub mod provider;
pub mod utils;

use model::server::ServerConfig;

// Source of the shared server configuration, queried once while a session
// config is being built
pub trait ServerConfigProvider {
    fn get_if_unique(&self) -> Result<Option<ServerConfig>, model::provider::Error>;
}
