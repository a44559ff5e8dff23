use crate::prelude::*;
use clap::Parser;
use usersearch::ClientConfig;

mod find;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Query a paginated, filterable search users endpoint"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Search server URL, overrides USERSEARCH_URL
    #[clap(long, global = true)]
    url: Option<String>,

    /// Access token sent in the AccessToken header, overrides USERSEARCH_ACCESS_TOKEN
    #[clap(long, global = true)]
    access_token: Option<String>,

    /// Request timeout in milliseconds, overrides USERSEARCH_TIMEOUT_MS
    #[clap(long, global = true)]
    timeout_ms: Option<u64>,

    /// Cap applied to --limit, overrides USERSEARCH_MAX_PAGE_SIZE
    #[clap(long, global = true)]
    max_page_size: Option<usize>,

    /// Whether to display additional information.
    #[clap(long, env = "USERSEARCH_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Environment configuration with the command line flags applied on top.
    ///
    /// `--url` stands in for a missing USERSEARCH_URL.
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.client_config_from(|name| std::env::var(name).ok())
    }

    fn client_config_from(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ClientConfig> {
        let config = ClientConfig::from_lookup(lookup, self.url.clone())?;

        Ok(config.with_overrides(
            None,
            self.access_token.clone(),
            self.timeout_ms,
            self.max_page_size,
        ))
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Search users with pagination and ordering
    Find(crate::find::FindOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Find(options) => crate::find::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
