use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use instrumentalcli::{cli, config, error, management::Provider, youtube::Privacy};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify or YouTube
    Auth(AuthOptions),

    /// Copy a Spotify playlist to YouTube as instrumental versions
    Transfer(TransferArgs),

    /// Show how the search results for a single track score
    Match(MatchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Provider to authorize: spotify or youtube
    provider: Provider,
}

#[derive(Parser, Debug, Clone)]
pub struct TransferArgs {
    /// Spotify playlist id, spotify:playlist URI or open.spotify.com URL
    #[clap(long)]
    playlist: Option<String>,

    /// Title of the new YouTube playlist (default: "<spotify name> (Instrumental)")
    #[clap(long)]
    title: Option<String>,

    /// Description of the new YouTube playlist
    #[clap(long)]
    description: Option<String>,

    /// Privacy of the new YouTube playlist: private, unlisted or public
    #[clap(long, default_value = "private")]
    privacy: Privacy,

    /// Resolve every track but don't create or fill a YouTube playlist
    #[clap(long)]
    dry_run: bool,

    /// Print the transfer report as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct MatchOptions {
    /// Track title
    #[clap(long)]
    title: String,

    /// Track artist
    #[clap(long)]
    artist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Auth(opt) => cli::auth(opt.provider).await,
        Command::Transfer(opt) => {
            cli::transfer(cli::TransferOptions {
                playlist: opt.playlist,
                title: opt.title,
                description: opt.description,
                privacy: opt.privacy,
                dry_run: opt.dry_run,
                json: opt.json,
            })
            .await
        }
        Command::Match(opt) => cli::match_track(opt.title, opt.artist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
