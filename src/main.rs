use clap::{Parser, Subcommand};
use little_junior::{config, content, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "little-junior")]
#[command(about = "Site builder for the Little Junior DPS pre school and day care")]
#[command(long_about = "\
Site builder for the Little Junior DPS pre school and day care

All page copy is compiled in. The site directory only supplies configuration
and static assets:

  site/
  ├── config.toml                  # Optional; overrides the stock defaults
  └── assets/                      # Copied to <output>/assets/
      └── hero-children.png        # Hero image (path set by site.hero_image)

The build writes a single self-contained index.html plus the copied assets.
Set RUST_LOG=debug to see what the builder reads and writes.

Run 'little-junior gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site directory (config.toml and assets/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and copy assets into the output directory
    Build,
    /// Validate content and config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            content::validate()?;
            let site_config = config::load_config(&cli.source)?;
            println!(
                "==> Building {} \u{2192} {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = generate::generate(&cli.source, &cli.output, &site_config)?;
            output::print_generate_output(&report, &cli.output);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            content::validate()?;
            config::load_config(&cli.source)?;
            let config_path = cli.source.join("config.toml");
            let assets = generate::list_assets(&cli.source);
            output::print_check_output(
                config_path.is_file().then_some(config_path.as_path()),
                assets.len(),
            );
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
