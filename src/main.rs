//! termfolio - Entry Point

use clap::Parser;
use std::path::PathBuf;
use termfolio::config::{self, CliOverrides};
use termfolio::model::{AppError, PortfolioContent, SectionId, Theme};
use termfolio::view::{self, ColorConfig};
use tracing::info;

/// termfolio - a developer portfolio in your terminal
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(version)]
#[command(about = "A developer portfolio in your terminal")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Portfolio content file (.toml or .json) replacing the built-in page
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Starting color theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Section to open at (hero, about, skills, projects, contact)
    #[arg(long)]
    pub section: Option<SectionId>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Jump instead of animating scrolls
    #[arg(long)]
    pub no_smooth_scroll: bool,

    /// Do not draw the magnetic cursor indicator
    #[arg(long)]
    pub no_cursor: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            theme: self.theme,
            content_path: self.content.clone(),
            no_smooth_scroll: self.no_smooth_scroll,
            no_cursor: self.no_cursor,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = config::loader::resolve(args.config.clone(), args.overrides())?;

    termfolio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let content = match &config.content_path {
        Some(path) => PortfolioContent::load(path)?,
        None => PortfolioContent::builtin()?,
    };

    let colors = ColorConfig::from_env_and_args(args.no_color);
    view::run(content, config, colors, args.section)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["termfolio", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["termfolio", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["termfolio"]);
        assert_eq!(args.config, None);
        assert_eq!(args.content, None);
        assert_eq!(args.theme, None);
        assert_eq!(args.section, None);
        assert!(!args.no_color);
        assert!(!args.no_smooth_scroll);
        assert!(!args.no_cursor);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_theme_accepts_light() {
        let args = Args::parse_from(["termfolio", "--theme", "light"]);
        assert_eq!(args.theme, Some(Theme::Light));
    }

    #[test]
    fn test_theme_rejects_unknown() {
        assert!(Args::try_parse_from(["termfolio", "--theme", "solarized"]).is_err());
    }

    #[test]
    fn test_section_accepts_anchor() {
        let args = Args::parse_from(["termfolio", "--section", "#projects"]);
        assert_eq!(args.section, Some(SectionId::Projects));
    }

    #[test]
    fn test_section_rejects_unknown() {
        assert!(Args::try_parse_from(["termfolio", "--section", "blog"]).is_err());
    }

    #[test]
    fn test_flags_become_overrides() {
        let args = Args::parse_from([
            "termfolio",
            "--no-smooth-scroll",
            "--no-cursor",
            "--content",
            "me.toml",
        ]);
        let overrides = args.overrides();
        assert!(overrides.no_smooth_scroll);
        assert!(overrides.no_cursor);
        assert_eq!(overrides.content_path, Some(PathBuf::from("me.toml")));
    }
}
