use clap::{Parser, Subcommand};
use simple_share::{compose, config, normalize, order, output, posts, render};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-share")]
#[command(about = "Share buttons for static pages")]
#[command(long_about = "\
Share buttons for static pages

Reads share settings from a TOML or JSON file, decides which channels to show
and in what order, builds each channel's share link from a post's metadata,
and places the share bar above and/or below the post body.

Post files are TOML with a markdown body:

  posts/
  ├── first-light.toml     # permalink, title, excerpt?, image?, body
  └── 2024/
      └── harbour.toml     # nested directories are walked

Invalid settings never fail a render: each bad value falls back to its default.
Set RUST_LOG=simple_share=debug to see which values were replaced.

Run 'simple-share gen-config' to generate a documented share.toml.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock share.toml with all options documented
    GenConfig,
    /// Show the effective config and channel order
    Check {
        /// Share config (TOML or JSON); missing file means defaults
        #[arg(long, default_value = "share.toml")]
        config: PathBuf,
    },
    /// Sanitize a raw settings submission
    Sanitize {
        /// Raw submission (TOML or JSON)
        #[arg(long)]
        input: PathBuf,
        /// Write the sanitized config here instead of printing it
        #[arg(long)]
        write: Option<PathBuf>,
    },
    /// Render one post with its share bar to stdout
    Render {
        /// Share config (TOML or JSON); missing file means defaults
        #[arg(long, default_value = "share.toml")]
        config: PathBuf,
        /// Post file
        #[arg(long)]
        post: PathBuf,
        /// List each channel's share target instead of printing HTML
        #[arg(long)]
        targets: bool,
    },
    /// Render every post in a directory to <output>/<name>.html
    Build {
        /// Share config (TOML or JSON); missing file means defaults
        #[arg(long, default_value = "share.toml")]
        config: PathBuf,
        /// Directory of post files
        #[arg(long, default_value = "posts")]
        posts: PathBuf,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "simple_share=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Check { config: path } => {
            println!("==> Checking {}", path.display());
            let share_config = config::load_config(&path)?;
            let channels = order::resolve(&share_config);
            output::print_check_output(&share_config, &channels);
        }
        Command::Sanitize { input, write } => {
            let raw = config::load_raw_config(&input)?.ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} not found", input.display()),
                )
            })?;
            let sanitized = normalize::sanitize(&raw);
            match write {
                Some(path) => config::save_config(&path, &sanitized)?,
                None => print!("{}", toml::to_string_pretty(&sanitized)?),
            }
        }
        Command::Render {
            config: path,
            post,
            targets,
        } => {
            let share_config = config::load_config(&path)?;
            let post = posts::load_post(&post)?;
            if targets {
                let channels = order::resolve(&share_config);
                let composed = compose::compose_all(&channels, &share_config, &post.meta);
                output::print_targets(&channels, &composed);
            } else {
                println!(
                    "{}",
                    render::share_content(&post.body_html, &share_config, &post.meta)
                );
            }
        }
        Command::Build {
            config: path,
            posts: posts_dir,
            output: output_dir,
        } => {
            let share_config = config::load_config(&path)?;
            println!("==> Loading posts from {}", posts_dir.display());
            let loaded = posts::load_posts(&posts_dir)?;
            let rendered = posts::render_posts(&loaded, &share_config);
            posts::write_rendered(&output_dir, &rendered)?;
            output::print_build_output(&rendered);
            println!("==> Build complete: {}", output_dir.display());
        }
    }

    Ok(())
}
