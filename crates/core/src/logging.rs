//! Logging setup
//!
//! dynreflect logs through `tracing`. Libraries embedding it usually install
//! their own subscriber; [`init_logging`] is for programs that don't.

use tracing_subscriber::EnvFilter;

use crate::config::CatalogConfig;

/// Directive used when nothing else parses
const FALLBACK_DIRECTIVE: &str = "info";

/// Install a `tracing` fmt subscriber configured from `config`
///
/// `RUST_LOG` takes precedence. Otherwise the filter is `debug` when
/// `config.debug` is set, else `config.log_level` (falling back to `info`
/// if it does not parse).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(config: &CatalogConfig) -> bool {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = select_directive(config, rust_log.as_deref());

    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized (directive: {})", directive);
    }
    installed
}

/// Pick the first filter directive that parses
///
/// Order: non-empty `rust_log`, then `debug` or `config.log_level`, then `info`.
fn select_directive<'a>(config: &'a CatalogConfig, rust_log: Option<&'a str>) -> &'a str {
    let configured = if config.debug {
        "debug"
    } else {
        config.log_level.as_str()
    };

    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .into_iter()
        .chain([configured])
        .find(|directive| EnvFilter::try_new(*directive).is_ok())
        .unwrap_or(FALLBACK_DIRECTIVE)
}
