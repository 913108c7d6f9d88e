use clap::Parser;

/// Command-line interface definition for pontobot.
/// Every option can also come from the environment (or a `.env` file).
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "pontobot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Chat bot that records clock-in/clock-out timestamps in a relational store",
    long_about = None
)]
pub struct Cli {
    /// Bot authentication token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Database connection string (postgres://..., sqlite://path or a file path)
    #[arg(long = "database-url", env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Port for the liveness endpoint
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Command prefix
    #[arg(long, env = "BOT_PREFIX")]
    pub prefix: Option<String>,

    /// IANA timezone used to stamp events
    #[arg(long, env = "BOT_TIMEZONE")]
    pub timezone: Option<String>,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long = "log-level", env = "BOT_LOG_LEVEL")]
    pub log_level: Option<String>,
}
