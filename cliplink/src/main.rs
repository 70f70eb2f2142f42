use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use cliplink_core::{find_config, localize, logging, shuffle, Config, MedalLinks, Platform};

#[derive(Parser, Debug)]
#[command(name = "cliplink")]
#[command(about = "Resolve video clip links into embed and thumbnail URLs", long_about = None)]
struct Args {
    /// Config file (YAML or TOML)
    #[arg(long, global = true, env = "CLIPLINK_CONFIG_PATH")]
    config: Option<String>,

    /// Hostname of the embedding page, used as Twitch `parent`
    #[arg(long, global = true)]
    hostname: Option<String>,

    /// How Medal clips are linked
    #[arg(long, global = true, value_enum)]
    medal: Option<MedalArg>,

    /// Do not treat bare ids as YouTube ids for thumbnails
    #[arg(long, global = true)]
    no_bare_id_fallback: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the platform of a link
    Detect { url: String },
    /// Print the platform identifier of a link
    Id { url: String },
    /// Print the embeddable URL of a link
    Embed { url: String },
    /// Print the thumbnail URL of a link or bare id
    Thumbnail { url_or_id: String },
    /// Resolve a link into platform, id, embed and thumbnail
    Resolve {
        url: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the arguments in random order
    Shuffle { items: Vec<String> },
    /// Format a number with the configured locale
    Localize {
        #[arg(allow_negative_numbers = true)]
        num: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MedalArg {
    Direct,
    ClipPage,
}

impl From<MedalArg> for MedalLinks {
    fn from(arg: MedalArg) -> Self {
        match arg {
            MedalArg::Direct => Self::Direct,
            MedalArg::ClipPage => Self::ClipPage,
        }
    }
}

impl Args {
    /// Command line flags override the loaded configuration
    fn apply(&self, config: &mut Config) {
        if let Some(hostname) = &self.hostname {
            config.embed.hostname = Some(hostname.clone());
        }
        if let Some(medal) = self.medal {
            config.links.medal = medal.into();
        }
        if self.no_bare_id_fallback {
            config.links.bare_id_fallback = false;
        }
    }
}

fn run(command: Command, config: &Config) -> Vec<String> {
    let resolver = config.resolver();

    match command {
        Command::Detect { url } => vec![Platform::detect(&url).to_string()],
        Command::Id { url } => {
            let platform = Platform::detect(&url);
            vec![platform.extract_id(&url).unwrap_or_default()]
        }
        Command::Embed { url } => vec![resolver.embed(&url)],
        Command::Thumbnail { url_or_id } => {
            vec![resolver.thumbnail(&url_or_id).unwrap_or_default()]
        }
        Command::Resolve { url, json } => {
            let resolved = resolver.resolve(&url);
            if json {
                vec![serde_json::to_string_pretty(&resolved).unwrap_or_default()]
            } else {
                vec![
                    format!("platform:  {}", resolved.platform),
                    format!("id:        {}", resolved.id.unwrap_or_default()),
                    format!("embed:     {}", resolved.embed_url),
                    format!("thumbnail: {}", resolved.thumbnail_url.unwrap_or_default()),
                ]
            }
        }
        Command::Shuffle { mut items } => {
            shuffle(&mut items);
            items
        }
        Command::Localize { num } => vec![localize(num, &config.locale)],
    }
}

/// Configuration from file/env with command line flags applied, validated once.
fn effective_config(args: &Args) -> Result<Config> {
    let mut config = find_config(args.config.as_deref())?;
    args.apply(&mut config);

    if let Err(errors) = config.validate() {
        return Err(anyhow::anyhow!(
            "Configuration validation failed with {} error(s): {}",
            errors.len(),
            errors.join("; ")
        ));
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load configuration, layer flags on top, then validate
    let config = effective_config(&args)?;

    // 2. Initialize logging (stderr)
    logging::init_logging(&config.logging)?;
    info!("cliplink starting");
    debug!(?config, "Effective configuration");

    // 3. Run the command
    for line in run(args.command, &config) {
        println!("{line}");
    }

    Ok(())
}
