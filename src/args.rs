use clap::Parser;

#[derive(Clone, Debug, Parser)]
pub struct CampusArgs {
    /// Port to listen on
    #[clap(long, env = "CAMPUS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database URL
    #[clap(long, env = "CAMPUS_DATABASE_URL", default_value = "sqlite:data.db")]
    pub database_url: String,
}
