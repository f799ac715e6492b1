//! Slipway CLI - sliplane.io provisioning from the command line
//!
//! Usage: slipway <COMMAND>
//!
//! Commands:
//!   run     Recreate the server and deploy the Docker service
//!   login   Sign in and persist the session without provisioning

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use slipway::config::Config;
use slipway::domain::AuthOutcome;
use slipway::presentation::cli::ColorWhen;
use slipway::presentation::{
    create_event_sink, create_pipeline, create_renderer, print_config_warnings, Cli, Commands,
    OutputFormat,
};
use slipway::RunOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = resolve_color(cli.color);

    match cli.command {
        Commands::Run {
            server,
            image,
            env_vars,
            location,
            cookie_file,
            headed,
            browser,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(server) = server {
                config.server.name = server;
            }
            if let Some(image) = image {
                config.deploy.image = image;
            }
            if let Some(env_vars) = env_vars {
                config.deploy.env_vars = env_vars;
            }
            if let Some(location) = location {
                config.server.location = location;
            }
            if let Some(cookie_file) = cookie_file {
                config.session.cookie_file = cookie_file;
            }
            if let Some(browser) = browser {
                config.sidecar.browser = browser;
            }
            if headed {
                config.sidecar.headless = false;
            }
            cmd_run(config, cli.json, color, cli.verbose)
        }
        Commands::Login {
            cookie_file,
            headed,
            browser,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(cookie_file) = cookie_file {
                config.session.cookie_file = cookie_file;
            }
            if let Some(browser) = browser {
                config.sidecar.browser = browser;
            }
            if headed {
                config.sidecar.headless = false;
            }
            cmd_login(config, cli.json, color, cli.verbose)
        }
    }
}

/// Load config from an explicit file or the default hierarchy, surfacing
/// unknown-key warnings on stderr. Environment overrides apply either way.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            print_config_warnings(&warnings);
            Ok(config.with_env_overrides())
        }
        None => Ok(Config::load_or_default(Some(Path::new(".")))),
    }
}

fn resolve_color(when: Option<ColorWhen>) -> bool {
    match when {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

fn cmd_run(config: Config, json: bool, color: bool, verbose: u8) -> Result<()> {
    if config.deploy.image.is_empty() {
        anyhow::bail!(
            "no image to deploy; set --image, SLIPWAY_IMAGE, or deploy.image in slipway.toml"
        );
    }
    if config.credentials.is_anonymous() && !json {
        eprintln!("⚠ No usable credentials; set SLIPWAY_CREDENTIALS to \"username password\"");
    }

    let options = RunOptions::from_config(&config);
    let events = create_event_sink(json, color, verbose);
    let mut pipeline = create_pipeline(&config)?;

    let report = pipeline.run_with_events(&options, events);

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    create_renderer(format, color, true).render(&report);

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_login(config: Config, json: bool, color: bool, verbose: u8) -> Result<()> {
    if config.credentials.is_anonymous() && !json {
        eprintln!("⚠ No usable credentials; set SLIPWAY_CREDENTIALS to \"username password\"");
    }

    let options = RunOptions::from_config(&config);
    let events = create_event_sink(json, color, verbose);
    let mut pipeline = create_pipeline(&config)?;

    let report = pipeline.login(&options, events);

    if json {
        let output = serde_json::json!({
            "event": "login_report",
            "authenticated": report.auth.is_authenticated(),
            "cookie_file": config.session.cookie_file.display().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match &report.auth {
            AuthOutcome::CachedSession => {
                println!("✓ Saved session is still valid; nothing to do")
            }
            AuthOutcome::FreshLogin => println!(
                "✓ Signed in; session saved to {}",
                config.session.cookie_file.display()
            ),
            AuthOutcome::Failed { reason } => println!("✗ Login failed: {}", reason),
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
