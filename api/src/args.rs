use clap::Parser;
use ladle_core::domain::common::{DatabaseConfig, LadleConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "ladle-api", about = "Ladle recipe API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-port", env = "LADLE_SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path prefix mounted in front of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "LADLE_SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Base URL used when generating canonical resource locations.
    #[arg(
        long = "server-public-url",
        env = "LADLE_SERVER_PUBLIC_URL",
        default_value = "http://localhost:3000"
    )]
    pub public_url: String,

    #[arg(
        long = "server-allowed-origins",
        env = "LADLE_SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "LADLE_DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "LADLE_DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "LADLE_DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "LADLE_DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "LADLE_DATABASE_NAME", default_value = "ladle")]
    pub name: String,
}

impl From<Args> for LadleConfig {
    fn from(args: Args) -> Self {
        LadleConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            public_url: args.server.public_url,
        }
    }
}
