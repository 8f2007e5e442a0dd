use anyhow::{Context, Result};
use figment::{
    providers::{Format, Json as FigmentJson, Serialized},
    value::Value as FigmentValue,
    Figment, Profile,
};
use prmeta_core::{Config, DEFAULT_WELL_KNOWN_NAME};
use serde_json::{json, Value};
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::command::{SubcommandRun, DEFAULT_ADDR};
use crate::utils::clean_json;

pub async fn run(cli: &SubcommandRun) -> Result<()> {
    let config = load_config(cli)?;

    let env_filter = config
        .application
        .log_filter
        .as_deref()
        .unwrap_or("info")
        .parse::<EnvFilter>()
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(env_filter)
        .init();
    tracing::info!("{}", serde_json::to_string_pretty(&config)?);

    let addr = config.server.addr;
    let app = prmeta_svr::router(config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server started at: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn load_config(cli: &SubcommandRun) -> Result<Config> {
    let configfile = cli.configfile.clone().map(FigmentJson::file);
    Figment::new()
        .merge(figment_default()?)
        .merge(configfile.unwrap_or(FigmentJson::string("{}")))
        .merge(figment_merge(cli)?)
        .extract()
        .context("Failed to load configuration")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = ?err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down...");
}

fn figment_default() -> Result<Serialized<FigmentValue>> {
    serialized(json!({
        "application": {
            "log_filter": "info",
            "prometheus": false,
            "health_check": true,
        },
        "server": {
            "addr": DEFAULT_ADDR,
        },
        "resource": {
            "authorization_servers": [],
            "well_known_name": DEFAULT_WELL_KNOWN_NAME,
            "additional_metadata": {},
        }
    }))
}

fn figment_merge(cli: &SubcommandRun) -> Result<Serialized<FigmentValue>> {
    serialized(clean_json(json!({
        "application": {
            "log_filter": cli.log_filter,
            "prometheus": cli.prometheus,
            "health_check": cli.health_check,
        },
        "server": {
            "addr": cli.addr,
        },
        "resource": {
            "authorization_servers": cli.authorization_servers,
            "resource_url": cli.resource_url,
            "well_known_name": cli.well_known_name,
        }
    })))
}

fn serialized(value: Value) -> Result<Serialized<FigmentValue>> {
    let figment_value: FigmentValue =
        serde_json::from_value(value).context("Failed to convert configuration")?;
    Ok(Serialized::from(figment_value, Profile::Default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::command::{Cli, Subcommands};

    fn run_args(args: &[&str]) -> SubcommandRun {
        let cli = Cli::try_parse_from(["prmeta", "run"].iter().chain(args)).unwrap();
        let Subcommands::Run(run) = cli.subcommand;
        run
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = load_config(&run_args(&[])).unwrap();
        assert_eq!(config.server.addr, DEFAULT_ADDR);
        assert!(config.application.health_check);
        assert!(!config.application.prometheus);
        assert_eq!(config.resource.well_known_name, DEFAULT_WELL_KNOWN_NAME);
        assert!(config.resource.authorization_servers.is_empty());
        assert!(config.resource.resource_url.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = load_config(&run_args(&[
            "--authorization-server",
            "https://auth.example.com",
            "--resource-url",
            "https://rs.example.com",
            "--health-check",
            "false",
        ]))
        .unwrap();
        assert_eq!(
            config.resource.authorization_servers,
            vec!["https://auth.example.com"]
        );
        assert_eq!(
            config.resource.resource_url.as_deref(),
            Some("https://rs.example.com")
        );
        assert!(!config.application.health_check);
        assert_eq!(config.server.addr, DEFAULT_ADDR);
    }
}
