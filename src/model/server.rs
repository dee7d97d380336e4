use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::duration;

pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Shared server level configuration (`server.*` keys).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub servlet: ServerServletConfig,
}

/// Servlet part of the server config, always carries a session by default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerServletConfig {
    #[serde(default = "default_session")]
    pub session: Option<ServerSessionConfig>,
}

impl Default for ServerServletConfig {
    fn default() -> Self {
        Self {
            session: default_session(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerSessionConfig {
    #[serde(default = "default_timeout", with = "duration::serde_opt")]
    pub timeout: Option<Duration>,
}

fn default_session() -> Option<ServerSessionConfig> {
    Some(ServerSessionConfig::default())
}

fn default_timeout() -> Option<Duration> {
    Some(DEFAULT_SESSION_TIMEOUT)
}

impl Default for ServerSessionConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

impl ServerConfig {
    pub fn with_session_timeout(timeout: Option<Duration>) -> Self {
        ServerConfig {
            servlet: ServerServletConfig {
                session: Some(ServerSessionConfig { timeout }),
            },
        }
    }

    /// Timeout of the servlet session, if both the session and its timeout are set.
    pub fn session_timeout(&self) -> Option<Duration> {
        self.servlet.session.as_ref().and_then(|s| s.timeout)
    }
}
