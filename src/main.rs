use age_skill::domain::model::{Intent, Request, SkillRequest};
use age_skill::utils::logger;
use age_skill::{CliConfig, SkillError, SkillRouter, SystemClock};
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting age-skill CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let router = SkillRouter::new(SystemClock);

    let response = match (&config.request, &config.intent) {
        (Some(_), Some(_)) => {
            return Err(SkillError::ConfigError {
                message: "--request and --intent are mutually exclusive".to_string(),
            }
            .into());
        }
        (Some(path), None) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read request envelope from {path}"))?;
            let envelope: SkillRequest = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse request envelope from {path}"))?;
            router.handle(&envelope)
        }
        (None, Some(name)) => router.route(&Request::Intent {
            intent: Intent {
                name: name.clone(),
                slots: None,
            },
        }),
        (None, None) => router.route(&Request::Launch),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
