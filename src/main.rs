use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sessionware::binder::{properties, session, Properties};
use sessionware::model::config::SessionConfig;
use sessionware::model::dispatcher::DispatcherType;
use sessionware::model::store::StoreType;
use sessionware::utils::duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Resolves session settings and prints them as JSON
#[derive(Parser, Debug)]
#[command(version, name = "sessionware", about, long_about = None)]
struct Args {
    /// Properties file with spring.session.* and server.* keys
    #[arg(long, env = "SESSIONWARE_CONFIG")]
    config: Option<PathBuf>,
    /// Session store type, overrides spring.session.store-type
    #[arg(long, env = "SESSIONWARE_STORE_TYPE", value_enum, ignore_case = true)]
    store_type: Option<StoreType>,
    /// Session repository filter order
    #[arg(long, env = "SESSIONWARE_FILTER_ORDER", allow_hyphen_values = true)]
    filter_order: Option<i32>,
    /// Session repository filter dispatcher types, comma separated
    #[arg(
        long,
        env = "SESSIONWARE_FILTER_DISPATCHER_TYPES",
        value_enum,
        ignore_case = true,
        value_delimiter = ','
    )]
    filter_dispatcher_types: Option<Vec<DispatcherType>>,
    /// Server session timeout, e.g. 30m or 1800
    #[arg(long, env = "SESSIONWARE_SERVER_SESSION_TIMEOUT", value_parser = duration::parse)]
    server_session_timeout: Option<Duration>,
}

async fn main_int(args: Args) -> anyhow::Result<()> {
    log::info!("Starting sessionware");
    tracing::info!(version = env!("CARGO_PKG_VERSION"));

    let mut props = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading properties");
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| anyhow::anyhow!("can't read {}: {}", path.display(), e))?;
            properties::parse(&text)?
        }
        None => Vec::new(),
    };
    props.extend(overrides(&args));

    let cfg = session::bind(&props)?;
    log_config(&cfg);
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

fn overrides(args: &Args) -> Properties {
    let mut res = Vec::new();
    if let Some(timeout) = &args.server_session_timeout {
        res.push((
            "server.servlet.session.timeout".to_string(),
            duration::format(timeout),
        ));
    }
    if let Some(store_type) = args.store_type {
        res.push(("spring.session.store-type".to_string(), store_type.to_string()));
    }
    if let Some(order) = args.filter_order {
        res.push((
            "spring.session.servlet.filter-order".to_string(),
            order.to_string(),
        ));
    }
    if let Some(types) = &args.filter_dispatcher_types {
        let value = types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(",");
        res.push((
            "spring.session.servlet.filter-dispatcher-types".to_string(),
            value,
        ));
    }
    res
}

fn log_config(cfg: &SessionConfig) {
    tracing::info!(
        store_type = cfg
            .store_type()
            .map_or_else(|| "auto".to_string(), |s| s.to_string()),
        "cfg"
    );
    tracing::info!(
        timeout = cfg
            .timeout()
            .map_or_else(|| "none".to_string(), |t| duration::format(&t)),
        "cfg"
    );
    tracing::info!(filter_order = cfg.servlet().filter_order(), "cfg");
    tracing::info!(
        filter_dispatcher_types = ?cfg.servlet().filter_dispatcher_types(),
        "cfg"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
    let args = Args::parse();
    if let Err(e) = main_int(args).await {
        log::error!("{}", e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_empty() {
        let args = Args::try_parse_from(["sessionware"]).unwrap();
        assert!(overrides(&args).is_empty());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "sessionware",
            "--store-type",
            "REDIS",
            "--filter-order",
            "-10",
            "--filter-dispatcher-types",
            "request,error",
            "--server-session-timeout",
            "1800",
        ])
        .unwrap();
        let props = overrides(&args);
        let cfg = session::bind(&props).unwrap();
        assert_eq!(Some(StoreType::Redis), cfg.store_type());
        assert_eq!(-10, cfg.servlet().filter_order());
        assert_eq!(2, cfg.servlet().filter_dispatcher_types().len());
        assert_eq!(Some(Duration::from_secs(1800)), cfg.timeout());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut props = properties::parse("spring.session.store-type=jdbc").unwrap();
        let args = Args::try_parse_from(["sessionware", "--store-type", "hazelcast"]).unwrap();
        props.extend(overrides(&args));
        let cfg = session::bind(&props).unwrap();
        assert_eq!(Some(StoreType::Hazelcast), cfg.store_type());
    }

    #[test]
    fn test_generic_env_names_ignored() {
        std::env::set_var("STORE_TYPE", "redis");
        std::env::set_var("FILTER_ORDER", "7");
        let args = Args::try_parse_from(["sessionware"]).unwrap();
        std::env::remove_var("STORE_TYPE");
        std::env::remove_var("FILTER_ORDER");
        assert_eq!(None, args.store_type);
        assert_eq!(None, args.filter_order);
    }

    #[test]
    fn test_bad_store_type_rejected() {
        assert!(Args::try_parse_from(["sessionware", "--store-type", "memcached"]).is_err());
    }
}
