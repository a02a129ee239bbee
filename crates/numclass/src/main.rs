use crate::prelude::*;
use clap::Parser;
use numclass_core::fact::DEFAULT_FACTS_URL;
use numclass_core::info::{Identity, DEFAULT_EMAIL, DEFAULT_GITHUB_URL};
use std::time::Duration;

mod classify;
mod error;
mod facts;
mod info;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify integers (prime, perfect, Armstrong, parity, digit sum) with a fun fact"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the number facts service
    #[clap(long, env = "NUMCLASS_FACTS_URL", global = true, default_value = DEFAULT_FACTS_URL)]
    facts_url: String,

    /// Seconds to wait for a fun fact before using the local fallback
    #[clap(
        long,
        env = "NUMCLASS_FACT_TIMEOUT",
        global = true,
        default_value = "3",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    fact_timeout: u64,

    /// Operator email reported by the identity endpoint
    #[clap(long, env = "NUMCLASS_EMAIL", global = true, default_value = DEFAULT_EMAIL)]
    email: String,

    /// Repository URL reported by the identity endpoint
    #[clap(long, env = "NUMCLASS_GITHUB_URL", global = true, default_value = DEFAULT_GITHUB_URL)]
    github_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "NUMCLASS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            github_url: self.github_url.clone(),
        }
    }

    pub fn fact_timeout(&self) -> Duration {
        Duration::from_secs(self.fact_timeout)
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the classification API over HTTP
    Serve(crate::server::ServeOptions),

    /// Classify a single number
    Classify(crate::classify::ClassifyOptions),

    /// Print the operator identity payload
    Info(crate::info::InfoOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Classify(options) => crate::classify::run(options, app.global).await,
        SubCommands::Info(options) => crate::info::run(options, app.global).await,
    }
}
