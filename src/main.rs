//! folio - a single-page portfolio in the terminal

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use folio::App;
use folio::config::Config;
use folio::page::{NoopReveal, RevealEffect, ScrollBehavior, ScrollReveal, Scroller};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Single-page portfolio rendered in the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show every section immediately instead of fading it in
    #[arg(long, global = true)]
    no_reveal: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a single frame as plain text
    Render {
        /// Terminal width in columns
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
        width: u16,
        /// Terminal height in rows
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..))]
        height: u16,
        /// Rows scrolled from the top of the page
        #[arg(long, default_value_t = 0)]
        scroll: i32,
        /// Draw with the mobile menu open
        #[arg(long)]
        menu: bool,
    },
    /// Print the computed view state as JSON
    State {
        /// Terminal width in columns
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
        width: u16,
        /// Terminal height in rows
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..))]
        height: u16,
        /// Rows scrolled from the top of the page
        #[arg(long, default_value_t = 0)]
        scroll: i32,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::InitConfig { force }) => {
            let path = cli.config.unwrap_or_else(Config::default_path);
            cmd_init_config(&path, force)
        }
        Some(Commands::Render {
            width,
            height,
            scroll,
            menu,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let mut app = headless_app(config, width, height, scroll);
            if menu {
                app.toggle_menu();
            }
            print!("{}", folio::tui::render_to_string(&mut app, width, height)?);
            Ok(())
        }
        Some(Commands::State {
            width,
            height,
            scroll,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let app = headless_app(config, width, height, scroll);
            println!("{}", serde_json::to_string_pretty(&app.view_state())?);
            Ok(())
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            let reveal: Box<dyn RevealEffect> = if cli.no_reveal {
                Box::new(NoopReveal)
            } else {
                Box::new(ScrollReveal::new())
            };
            folio::tui::run(App::new(config, reveal))
        }
    }
}

/// Verbosity from `DEBUG`: unset, unparsable or 0 disables logging,
/// 1 is warn, 2 info, anything higher debug
fn log_level(debug: Option<&str>) -> Option<tracing::Level> {
    match debug?.trim().parse::<u8>().ok()? {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        _ => Some(tracing::Level::DEBUG),
    }
}

/// Truncate the log and, when `DEBUG` asks for it, write tracing output there.
/// Follow along with `tail -f` on the path from `paths::log_path`.
fn init_logging() {
    let log_path = folio::paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let Some(level) = log_level(std::env::var("DEBUG").ok().as_deref()) else {
        return;
    };
    let (Some(dir), Some(file)) = (log_path.parent(), log_path.file_name()) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_writer(tracing_appender::rolling::never(dir, file))
        .with_max_level(level)
        .with_ansi(false)
        .init();
    tracing::info!(?level, "logging started");
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// A mounted app at a fixed size and scroll position, without the reveal effect
fn headless_app(config: Config, width: u16, height: u16, scroll: i32) -> App {
    let now = Instant::now();
    let mut app = App::new(config, Box::new(NoopReveal));
    app.resize(width, height, now);
    app.mount(now);
    app.viewport.scroll_to(scroll, ScrollBehavior::Instant);
    app.on_scroll(now);
    app
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_debug_var() {
        assert_eq!(log_level(None), None);
        assert_eq!(log_level(Some("0")), None);
        assert_eq!(log_level(Some("verbose")), None);
        assert_eq!(log_level(Some("1")), Some(tracing::Level::WARN));
        assert_eq!(log_level(Some("2")), Some(tracing::Level::INFO));
        assert_eq!(log_level(Some(" 3")), Some(tracing::Level::DEBUG));
        assert_eq!(log_level(Some("9")), Some(tracing::Level::DEBUG));
    }

    #[test]
    fn test_cli_parses_render_flags() -> Result<()> {
        let cli = Cli::try_parse_from([
            "folio",
            "--no-reveal",
            "render",
            "--width",
            "50",
            "--menu",
        ])?;
        assert!(cli.no_reveal);
        assert!(matches!(
            cli.command,
            Some(Commands::Render {
                width: 50,
                height: 40,
                scroll: 0,
                menu: true
            })
        ));
        Ok(())
    }
}
