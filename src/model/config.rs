use std::{collections::HashSet, time::Duration};

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    model::{dispatcher::DispatcherType, filter, provider, server::ServerConfig, store::StoreType},
    utils::duration,
    ServerConfigProvider,
};

/// Session settings bound from the `spring.session.*` keys.
///
/// The timeout is copied from the server config once, when the value is
/// built, and has no setter:
///
/// ```compile_fail
/// use sessionware::model::config::SessionConfig;
/// let mut cfg = SessionConfig::from_server(None);
/// cfg.set_timeout(None);
/// ```
///
/// ```compile_fail
/// use sessionware::model::config::SessionConfig;
/// let mut cfg = SessionConfig::from_server(None);
/// cfg.timeout = None;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionConfig {
    store_type: Option<StoreType>,
    #[serde(with = "duration::serde_opt")]
    timeout: Option<Duration>,
    servlet: ServletConfig,
}

impl SessionConfig {
    /// Builds the config, asking `provider` once for the shared server config.
    pub fn new<P>(provider: &P) -> Result<Self, provider::Error>
    where
        P: ServerConfigProvider + ?Sized,
    {
        let server = provider.get_if_unique()?;
        Ok(Self::from_server(server.as_ref()))
    }

    pub fn from_server(server: Option<&ServerConfig>) -> Self {
        let timeout = server.and_then(ServerConfig::session_timeout);
        match timeout {
            Some(t) => tracing::debug!(timeout = duration::format(&t), "session timeout from server"),
            None => tracing::debug!("no server session timeout"),
        }
        SessionConfig {
            store_type: None,
            timeout,
            servlet: ServletConfig::default(),
        }
    }

    pub fn store_type(&self) -> Option<StoreType> {
        self.store_type
    }

    pub fn set_store_type(&mut self, store_type: Option<StoreType>) {
        self.store_type = store_type;
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn servlet(&self) -> &ServletConfig {
        &self.servlet
    }

    pub fn servlet_mut(&mut self) -> &mut ServletConfig {
        &mut self.servlet
    }

    pub fn set_servlet(&mut self, servlet: ServletConfig) {
        self.servlet = servlet;
    }
}

/// Registration settings of the session repository filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServletConfig {
    filter_order: i32,
    #[serde(serialize_with = "serialize_sorted")]
    filter_dispatcher_types: HashSet<DispatcherType>,
}

fn serialize_sorted<S>(types: &HashSet<DispatcherType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut sorted: Vec<&DispatcherType> = types.iter().collect();
    sorted.sort_by_key(|t| t.to_string());
    serializer.collect_seq(sorted)
}

impl Default for ServletConfig {
    fn default() -> Self {
        ServletConfig {
            filter_order: filter::DEFAULT_ORDER,
            filter_dispatcher_types: HashSet::from([
                DispatcherType::Async,
                DispatcherType::Error,
                DispatcherType::Request,
            ]),
        }
    }
}

impl ServletConfig {
    pub fn new(filter_order: i32, filter_dispatcher_types: HashSet<DispatcherType>) -> Self {
        ServletConfig {
            filter_order,
            filter_dispatcher_types,
        }
    }

    pub fn filter_order(&self) -> i32 {
        self.filter_order
    }

    pub fn set_filter_order(&mut self, filter_order: i32) {
        self.filter_order = filter_order;
    }

    pub fn filter_dispatcher_types(&self) -> &HashSet<DispatcherType> {
        &self.filter_dispatcher_types
    }

    pub fn filter_dispatcher_types_mut(&mut self) -> &mut HashSet<DispatcherType> {
        &mut self.filter_dispatcher_types
    }

    pub fn set_filter_dispatcher_types(&mut self, types: HashSet<DispatcherType>) {
        self.filter_dispatcher_types = types;
    }
}
