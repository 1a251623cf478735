use anyhow::{Context, Result};
use clap::Parser;
use magstand::app::App;
use magstand::catalog::Catalog;
use magstand::config::Config;
use magstand::content::ImageResolver;
use magstand::theme::ThemeVariant;
use magstand::ui;
use std::path::PathBuf;
use std::sync::Arc;

/// Get the config directory path (~/.config/magstand/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("magstand"))
}

#[derive(Parser, Debug)]
#[command(name = "magstand", about = "Terminal magazine and article browser")]
struct Args {
    /// Directory of fixture JSON files overriding the bundled data
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory that local image sources are resolved against
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Config file (default: ~/.config/magstand/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Colour theme: dark or light
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Load and validate the catalog, print a summary and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let data_dir = args.data_dir.or(config.data_dir);
    let assets_dir = args.assets_dir.or(config.assets_dir);
    let theme_name = args.theme.unwrap_or(config.theme);

    let catalog = match &data_dir {
        Some(dir) => Catalog::load_dir(dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display()))?,
        None => Catalog::bundled().context("Failed to load bundled catalog")?,
    };

    let warnings = catalog.warnings();
    for warning in &warnings {
        tracing::warn!(%warning, "Catalog consistency");
    }

    if args.check {
        println!(
            "{} articles, {} magazines, {} issues, {} issue listings, {} article bodies, {} warnings",
            catalog.articles.len(),
            catalog.magazines.len(),
            catalog.issues.len(),
            catalog.issue_contents.len(),
            catalog.bodies.len(),
            warnings.len()
        );
        for warning in &warnings {
            println!("warning: {}", warning);
        }
        return Ok(());
    }

    let mut app = App::new(Arc::new(catalog), ImageResolver::new(assets_dir));

    for warning in app.keybindings.apply_overrides(&config.keybindings) {
        tracing::warn!(%warning, "Keybinding override ignored");
    }

    match ThemeVariant::from_str_name(&theme_name) {
        Some(variant) => app.set_theme(variant),
        None => tracing::warn!(theme = %theme_name, "Unknown theme, using dark"),
    }

    ui::run(&mut app).await?;
    Ok(())
}
