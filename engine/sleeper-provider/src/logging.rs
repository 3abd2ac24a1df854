//! Logging and tracing setup shared by the proxy and the CLI

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Initialize logging; `RUST_LOG` wins over `default_level`
///
/// `format` is "json", "pretty" or anything else for compact text. Output goes
/// to stderr so it never interleaves with CLI tables on stdout.
pub fn initialize_logging(default_level: &str, format: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = match format {
        "json" => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed(),
        "pretty" => fmt::layer().pretty().with_target(false).with_writer(std::io::stderr).boxed(),
        _ => fmt::layer().with_target(false).with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()?;

    Ok(())
}
