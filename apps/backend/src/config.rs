//! Server configuration from environment variables.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use vocab_core::{ReviewInterval, SchedulerSettings};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub words_path: PathBuf,
    /// When set, every new session is seeded deterministically.
    pub rng_seed: Option<u64>,
    pub scheduler: SchedulerSettings,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a key lookup function.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000)?;
        let words_path = lookup("WORDS_PATH")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("WORDS_PATH must be set"))?;
        let rng_seed = parse_optional(&lookup, "RNG_SEED")?;

        let defaults = SchedulerSettings::default();
        let scheduler = SchedulerSettings {
            new_cards_before_review: parse_or(
                &lookup,
                "NEW_CARDS_BEFORE_REVIEW",
                defaults.new_cards_before_review,
            )?,
            review_interval: ReviewInterval {
                min: parse_or(&lookup, "REVIEW_INTERVAL_MIN", defaults.review_interval.min)?,
                max: parse_or(&lookup, "REVIEW_INTERVAL_MAX", defaults.review_interval.max)?,
            },
        };

        Ok(Self {
            host,
            port,
            words_path,
            rng_seed,
            scheduler,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("invalid {key}: {value}"))
        })
        .transpose()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_optional(lookup, key)?.unwrap_or(default))
}
