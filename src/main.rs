#![allow(non_snake_case)]

mod app;
mod components;
mod sections;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global asset base path, set from command line
static ASSET_BASE: OnceLock<String> = OnceLock::new();

/// Resolve an opaque asset reference against the configured base path.
///
/// The reference is treated as an opaque string; a broken path surfaces
/// as a broken image in the webview, never as an application error.
pub fn asset_url(path: &str) -> String {
    join_asset(ASSET_BASE.get().map(String::as_str), path)
}

fn join_asset(base: Option<&str>, path: &str) -> String {
    match base {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
        None => path.to_string(),
    }
}

/// Folio - single-page portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - single-page portfolio rendered with Dioxus")]
struct Args {
    /// Base path prepended to image asset references at render time
    #[arg(long)]
    asset_base: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(base) = args.asset_base {
        tracing::info!("Resolving assets against base path: {}", base);
        let _ = ASSET_BASE.set(base);
    }

    tracing::info!(
        "Starting '{}' portfolio ({}x{})",
        folio_content::PROFILE.name,
        args.width,
        args.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(folio_content::PROFILE.name)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::join_asset;

    #[test]
    fn no_base_leaves_reference_untouched() {
        assert_eq!(join_asset(None, "/assets/pic.png"), "/assets/pic.png");
    }

    #[test]
    fn base_and_reference_join_with_single_slash() {
        assert_eq!(
            join_asset(Some("https://cdn.example.com/"), "/assets/pic.png"),
            "https://cdn.example.com/assets/pic.png"
        );
        assert_eq!(
            join_asset(Some("/site"), "assets/pic.png"),
            "/site/assets/pic.png"
        );
    }
}
