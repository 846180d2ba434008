use clap::Parser;

/// Runtime settings, read from flags or `STOREFRONT_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", about = "Product catalog and order intake service")]
pub struct AppConfig {
    /// Interface to bind the HTTP server to.
    #[arg(long, env = "STOREFRONT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, env = "STOREFRONT_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Request buffer of each store actor.
    #[arg(long, env = "STOREFRONT_CHANNEL_CAPACITY", default_value_t = 32,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub channel_capacity: u64,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "STOREFRONT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl AppConfig {
    pub fn channel_capacity(&self) -> usize {
        usize::try_from(self.channel_capacity).unwrap_or(usize::MAX)
    }
}
