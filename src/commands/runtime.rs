use crate::cli::{Cli, Commands};
use crate::domain::models::{ConfigReport, RunReport};
use crate::services::config::validate_config;
use crate::services::environment::{setup_environment, status};
use crate::services::output::{print_one, print_out};

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None => {
            if !cli.json {
                println!("Setting up environment...");
            }
            let setup = setup_environment(&cli.root)?;
            if !cli.json {
                println!("Environment setup complete!");
            }
            let config = validate_config(&cli.root, &cli.config);
            print_one(cli.json, RunReport { setup, config }, |r| {
                config_line(&r.config)
            })?;
        }
        Some(Commands::Setup) => {
            if !cli.json {
                println!("Setting up environment...");
            }
            let setup = setup_environment(&cli.root)?;
            print_one(cli.json, setup, |_| {
                "Environment setup complete!".to_string()
            })?;
        }
        Some(Commands::Validate) => {
            let config = validate_config(&cli.root, &cli.config);
            // Absence is a normal negative result, not an error: exit stays 0.
            print_one(cli.json, config, config_line)?;
        }
        Some(Commands::Status) => {
            let items = status(&cli.root, &cli.config);
            print_out(cli.json, &items, |i| format!("{}\t{}", i.name, i.status))?;
        }
    }
    Ok(())
}

fn config_line(report: &ConfigReport) -> String {
    if report.present {
        "Configuration is valid".to_string()
    } else {
        format!("Configuration file {} not found", report.config)
    }
}
