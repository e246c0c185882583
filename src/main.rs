use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{debug, error, trace, warn};

use mentor_dashboard::config::{
    load_dotenv, ServerConfig, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_NAME, DEFAULT_STATIC_DIR,
};
use mentor_dashboard::server::{self, AppContext};
use mentor_dashboard::store::connect_store;

/// Serve startup, mentor and session data to the dashboard
#[derive(Parser)]
#[command(name = "mentor-dashboard")]
#[command(about = "API for the startups and mentoring sessions dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Database holding the startup, mentorship and sessions collections
    #[arg(long, env = "DATABASE_NAME", default_value = DEFAULT_DATABASE_NAME)]
    database_name: String,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind: SocketAddr,

    /// Directory with the frontend files (index.html, scripts, styles)
    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            database_url: self.database_url.clone(),
            database_name: self.database_name.clone(),
            bind_addr: self.bind,
            static_dir: self.static_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    // before parsing, so clap's `env` attributes see the file's values
    let dotenv = load_dotenv();
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,tower=debug,mongodb=debug", // -vvv shows everything including dependencies
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_thread_ids(cli.verbose >= 3)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("mentor-dashboard started with verbosity level: {}", cli.verbose);
    match &dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => trace!("No .env file found"),
        Err(e) => warn!("Ignoring .env file: {}", e),
    }
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli.server_config()).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> mentor_dashboard::Result<()> {
    let store = connect_store(&config).await;
    let context = AppContext::new(store, &config.static_dir);
    server::serve(context, config.bind_addr).await?;
    Ok(())
}
