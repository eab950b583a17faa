//! Tracing subscriber setup shared by the server and the admin CLI.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber; `RUST_LOG` wins over `level`.
///
/// `format` is `json` for one JSON object per line, anything else for
/// human-readable text.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_installs_once() {
        assert!(init_tracing("info", "text").is_ok());
        assert!(init_tracing("info", "json").is_err());
    }
}
