use skycast_config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging.
/// - RUST_LOG wins over the configured filter
/// - JSON or plain text lines, always on stderr so stdout carries only output
pub fn init(service_name: &str, cfg: &AppConfig) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| cfg.log_filter());
    let registry = tracing_subscriber::registry().with(EnvFilter::new(env_filter));

    let result = if cfg.log_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    match result {
        Ok(()) => tracing::debug!(service = %service_name, "Logging initialized"),
        Err(e) => eprintln!("logging already initialized: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        let cfg = AppConfig::default();
        init("skycast-test", &cfg);
        init("skycast-test", &cfg);
    }
}
