use crate::prelude::{eprintln, println, *};
use clap::Parser;
use std::process::ExitCode;
use subtop_core::listing::{TimeWindow, TopQuery, DEFAULT_LIMIT, REDDIT_ORIGIN};

mod error;
mod fetch;
mod output;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch the top posts of a subreddit from the public Reddit JSON API"
)]
pub struct App {
    /// Name of the subreddit to fetch
    pub community: String,

    /// Number of posts to retrieve
    #[arg(short, long, env = "SUBTOP_LIMIT", default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Ranking window: hour, day, week, month, year, all
    #[arg(short = 't', long = "time", env = "SUBTOP_TIME", default_value = "day")]
    pub window: TimeWindow,

    /// Output raw JSON
    #[arg(long)]
    pub json: bool,

    /// Origin of the listing API
    #[arg(long, env = "SUBTOP_BASE_URL", default_value = REDDIT_ORIGIN, hide = true)]
    pub base_url: String,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "SUBTOP_VERBOSE", default_value = "false")]
    verbose: bool,
}

async fn run(app: App) -> Result<()> {
    let query = TopQuery::new(app.community, app.limit).with_window(app.window);
    let client = crate::fetch::RedditClient::new(&app.base_url)?;

    if app.global.verbose {
        eprintln!("Fetching {}", client.url_for(&query));
    }

    let posts = client.top_posts(&query).await;

    if app.json {
        return crate::output::output_json(&posts);
    }

    if posts.is_empty() {
        return Err(Error::NoPosts.into());
    }

    crate::output::output_formatted(&posts, &query)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match run(app).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if matches!(err.downcast_ref::<Error>(), Some(Error::NoPosts)) => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}
