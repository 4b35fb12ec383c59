use clap::{Parser, Subcommand};
use ori3nt8_site::{assets, config, generate, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ori3nt8-site")]
#[command(about = "Static site generator for the Ori3nt8 website")]
#[command(long_about = "\
Static site generator for the Ori3nt8 website

Renders the landing page and the 404 page from a small source directory:

  site/
  ├── site.toml                    # Optional; overrides stock metadata
  └── images/
      ├── ori3nt8_long_white.svg   # Navbar logo
      └── ori3nt8_screenshot.png   # Hero screenshot and preview image

Output:

  public/
  ├── index.html
  ├── 404.html
  ├── sitemap.xml
  └── static/                      # Content-hashed copies of images/

Run 'ori3nt8-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site
    Build,
    /// Validate config and assets without writing anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "warn"))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            println!("==> Generating → {}", cli.output.display());
            let report = generate::generate(&site_config, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", report.output_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let resolved = assets::resolve(&cli.source, &site_config.assets)?;
            output::print_check_output(&site_config.metadata, &resolved, &cli.source);
            println!("==> Site source is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
