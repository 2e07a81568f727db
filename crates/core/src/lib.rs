pub mod domain;
pub mod models;

pub mod config {
    use crate::models::Provider;
    use anyhow::Context;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub advisory_provider: Option<String>,
        pub sentry_dsn: Option<String>,
        pub port: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                advisory_provider: std::env::var("ADVISORY_PROVIDER").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                port: std::env::var("PORT").ok(),
            })
        }

        /// Configured model provider; defaults to the placeholder when unset.
        pub fn provider(&self) -> anyhow::Result<Provider> {
            match self.advisory_provider.as_deref() {
                Some(s) if !s.trim().is_empty() => s
                    .parse()
                    .context("ADVISORY_PROVIDER is not a supported provider"),
                _ => Ok(Provider::default()),
            }
        }

        pub fn port(&self) -> anyhow::Result<u16> {
            match self.port.as_deref() {
                Some(s) => s
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number (got {s:?})")),
                None => Ok(3000),
            }
        }
    }

}
