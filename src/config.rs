use crate::chatbot::types::DEFAULT_MATCH_THRESHOLD;
use anyhow::{Context, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_CATALOG: &str = "data/Sugerencias_Ahorro.csv";

pub const USAGE: &str = "Usage: energy_tips [--bind <addr:port>] [--catalog <path>] \
[--threshold <0-100>] [--stopword <word>]...

Environment fallbacks: TIPS_BIND, TIPS_CATALOG, TIPS_THRESHOLD,
TIPS_EXTRA_STOPWORDS (comma separated).";

/// Startup settings. Command-line flags win over environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub threshold: u8,
    pub extra_stopwords: Vec<String>,
}

impl Config {
    pub fn from_env_and_args() -> anyhow::Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// `args` excludes the program name; `env` looks up a variable by name.
    pub fn parse<F>(args: &[String], env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind = env("TIPS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let mut catalog = env("TIPS_CATALOG").unwrap_or_else(|| DEFAULT_CATALOG.to_string());
        let mut threshold = env("TIPS_THRESHOLD");
        let mut extra_stopwords: Vec<String> = env("TIPS_EXTRA_STOPWORDS")
            .map(|list| split_list(&list))
            .unwrap_or_default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--bind" | "--catalog" | "--threshold" | "--stopword" => {
                    let value = args
                        .get(i + 1)
                        .with_context(|| format!("{} requires a value", flag))?
                        .clone();
                    match flag {
                        "--bind" => bind = value,
                        "--catalog" => catalog = value,
                        "--threshold" => threshold = Some(value),
                        _ => extra_stopwords.push(value),
                    }
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument {}", other);
                    i += 1;
                }
            }
        }

        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", bind))?;

        let threshold = match threshold {
            Some(raw) => {
                let value: u8 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid threshold '{}'", raw))?;
                if value > 100 {
                    bail!("threshold must be between 0 and 100, got {}", value);
                }
                value
            }
            None => DEFAULT_MATCH_THRESHOLD,
        };

        Ok(Self {
            bind_addr,
            catalog_path: PathBuf::from(catalog),
            threshold,
            extra_stopwords,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
