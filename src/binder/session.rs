use std::collections::HashSet;

use crate::{
    model::{
        binding::Error,
        config::SessionConfig,
        dispatcher::DispatcherType,
        server::{ServerConfig, ServerSessionConfig},
        store::StoreType,
    },
    utils::duration,
    ServerConfigProvider,
};

use super::canonical;

const SESSION_PREFIX: &str = "spring.session.";
const SERVER_PREFIX: &str = "server.";

const STORE_TYPE: &str = "spring.session.storetype";
const FILTER_ORDER: &str = "spring.session.servlet.filterorder";
const FILTER_DISPATCHER_TYPES: &str = "spring.session.servlet.filterdispatchertypes";
const SERVER_SESSION_TIMEOUT: &str = "server.servlet.session.timeout";

/// Binds the `server.*` keys.
///
/// A server config only exists when at least one `server.*` key is present,
/// so `None` here means no server config at all and the session timeout stays
/// unset. Once any such key is present the config starts from
/// [`ServerConfig::default`], which carries the 30 minute session timeout.
pub fn bind_server(props: &[(String, String)]) -> Result<Option<ServerConfig>, Error> {
    let mut res: Option<ServerConfig> = None;
    for (key, value) in props {
        let canonical_key = canonical(key);
        if !canonical_key.starts_with(SERVER_PREFIX) {
            continue;
        }
        let server = res.get_or_insert_with(ServerConfig::default);
        if canonical_key == SERVER_SESSION_TIMEOUT {
            let timeout = if value.trim().is_empty() {
                None
            } else {
                Some(duration::parse(value).map_err(|e| Error::invalid(key, value, e))?)
            };
            server.servlet.session = Some(ServerSessionConfig { timeout });
        } else {
            tracing::trace!(key = key, "skip server key");
        }
    }
    Ok(res)
}

/// Applies the `spring.session.*` keys to `cfg`, later keys win.
pub fn bind_session(cfg: &mut SessionConfig, props: &[(String, String)]) -> Result<(), Error> {
    for (key, value) in props {
        let canonical_key = canonical(key);
        match canonical_key.as_str() {
            STORE_TYPE => {
                let store_type = parse_store_type(key, value)?;
                tracing::debug!(store_type = ?store_type, "bind");
                cfg.set_store_type(store_type);
            }
            FILTER_ORDER => {
                let order = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| Error::invalid(key, value, e))?;
                tracing::debug!(filter_order = order, "bind");
                cfg.servlet_mut().set_filter_order(order);
            }
            FILTER_DISPATCHER_TYPES => {
                let types = parse_dispatcher_types(key, value)?;
                tracing::debug!(filter_dispatcher_types = ?types, "bind");
                cfg.servlet_mut().set_filter_dispatcher_types(types);
            }
            other if other.starts_with(SESSION_PREFIX) => {
                tracing::trace!(key = key, "unknown session key ignored");
            }
            _ => {}
        }
    }
    Ok(())
}

/// Builds the session config from `provider` and binds the session keys on top.
pub fn bind_with<P>(provider: &P, props: &[(String, String)]) -> Result<SessionConfig, Error>
where
    P: ServerConfigProvider + ?Sized,
{
    let mut cfg = SessionConfig::new(provider)?;
    bind_session(&mut cfg, props)?;
    Ok(cfg)
}

/// Binds both the server and the session keys of `props`.
pub fn bind(props: &[(String, String)]) -> Result<SessionConfig, Error> {
    let server = bind_server(props)?;
    bind_with(&server, props)
}

fn parse_store_type(key: &str, value: &str) -> Result<Option<StoreType>, Error> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<StoreType>()
        .map(Some)
        .map_err(|e| Error::invalid(key, value, e))
}

fn parse_dispatcher_types(key: &str, value: &str) -> Result<HashSet<DispatcherType>, Error> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<DispatcherType>().map_err(|e| Error::invalid(key, value, e)))
        .collect()
}
