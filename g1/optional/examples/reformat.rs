//! Reads settings in one format and writes them in another, reporting which fields are set.
//!
//! ```text
//! echo '{"name":"foo","port":null}' | cargo run --example reformat -- --to yaml -v
//! ```

use std::error;
use std::io::{self, Read, Write};

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use g1_optional::{Value, json, yaml};

#[derive(Debug, Parser)]
struct Reformat {
    #[arg(long, value_enum, default_value_t = Format::Json, help = "Input format")]
    from: Format,
    #[arg(long, value_enum, default_value_t = Format::Json, help = "Output format")]
    to: Format,
    #[arg(long, help = "Pretty-print JSON output")]
    pretty: bool,

    #[arg(
        long,
        short = 'v',
        action = ArgAction::Count,
        help = "Make tracing output more verbose",
    )]
    verbose: u8,
    #[arg(long, action = ArgAction::Count, help = "Make tracing output less verbose")]
    silent: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct Settings {
    name: Value<String>,
    port: Value<u16>,
    ratio: Value<f64>,
    tags: Value<Vec<String>>,
}

impl Reformat {
    fn init_tracing(&self) {
        let level = i16::from(self.verbose).saturating_sub(i16::from(self.silent));
        let level_filter = match level {
            ..=-3 => LevelFilter::OFF,
            -2 => LevelFilter::ERROR,
            -1 => LevelFilter::WARN,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2.. => LevelFilter::TRACE,
        };
        tracing_subscriber::fmt()
            .compact()
            .with_writer(io::stderr)
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(level_filter.into())
                    .from_env_lossy(),
            )
            .init();
    }

    fn decode(&self, data: &str) -> Result<Settings, Box<dyn error::Error>> {
        Ok(match self.from {
            Format::Json => json::from_str(data)?,
            Format::Yaml => yaml::from_str(data)?,
        })
    }

    fn encode(&self, settings: &Settings) -> Result<String, Box<dyn error::Error>> {
        Ok(match (self.to, self.pretty) {
            (Format::Json, false) => json::to_string(settings)? + "\n",
            (Format::Json, true) => json::to_string_pretty(settings)? + "\n",
            (Format::Yaml, _) => yaml::to_string(settings)?,
        })
    }
}

fn log_field<T>(name: &str, value: &Value<T>)
where
    T: std::fmt::Debug,
{
    match value.as_option() {
        Some(value) => tracing::info!(name, ?value, "set"),
        None => tracing::debug!(name, "unset"),
    }
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let reformat = Reformat::parse();
    reformat.init_tracing();

    let mut data = String::new();
    io::stdin().read_to_string(&mut data)?;

    let settings = reformat.decode(&data).inspect_err(|error| {
        tracing::error!(from = ?reformat.from, %error, "decode");
    })?;
    log_field("name", &settings.name);
    log_field("port", &settings.port);
    log_field("ratio", &settings.ratio);
    log_field("tags", &settings.tags);

    let output = reformat.encode(&settings).inspect_err(|error| {
        tracing::error!(to = ?reformat.to, %error, "encode");
    })?;
    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}
