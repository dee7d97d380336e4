use crate::{
    model::{provider, server::ServerConfig},
    ServerConfigProvider,
};

/// Server configs registered by the application.
///
/// A lookup only yields a config when exactly one candidate is registered.
#[derive(Clone, Debug, Default)]
pub struct Candidates {
    items: Vec<ServerConfig>,
}

impl Candidates {
    pub fn new() -> Self {
        Candidates { items: Vec::new() }
    }

    pub fn register(&mut self, config: ServerConfig) {
        self.items.push(config);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ServerConfig>> for Candidates {
    fn from(items: Vec<ServerConfig>) -> Self {
        Candidates { items }
    }
}

impl ServerConfigProvider for Candidates {
    fn get_if_unique(&self) -> Result<Option<ServerConfig>, provider::Error> {
        match self.items.as_slice() {
            [single] => Ok(Some(single.clone())),
            items => {
                tracing::debug!(count = items.len(), "no unique server config");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use test_case::test_case;

    fn server(secs: u64) -> ServerConfig {
        ServerConfig::with_session_timeout(Some(Duration::from_secs(secs)))
    }

    #[test_case(vec![], None; "empty")]
    #[test_case(vec![server(10)], Some(server(10)); "single")]
    #[test_case(vec![server(10), server(20)], None; "ambiguous")]
    fn test_get_if_unique(items: Vec<ServerConfig>, expected: Option<ServerConfig>) {
        let candidates = Candidates::from(items);
        assert_eq!(expected, candidates.get_if_unique().unwrap());
    }

    #[test]
    fn test_register() {
        let mut candidates = Candidates::new();
        assert!(candidates.is_empty());
        candidates.register(server(1));
        assert_eq!(1, candidates.len());
        assert_eq!(Some(server(1)), candidates.get_if_unique().unwrap());
        candidates.register(server(2));
        assert_eq!(None, candidates.get_if_unique().unwrap());
    }
}
