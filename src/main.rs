//! Resume screener: AI-powered resume screening and scoring tool

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod pipeline;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ScreenerError};
use llm::HttpGenerationClient;
use log::{error, info};
use output::ReportGenerator;
use pipeline::ScreeningPipeline;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            resumes,
            job,
            output,
            save,
        } => {
            info!("Starting resume screening run");

            for resume in &resumes {
                cli::validate_file_extension(resume, &["pdf", "txt"])
                    .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
            }

            cli::validate_file_extension(&job, &["txt"]).map_err(|e| {
                ScreenerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format = cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;

            let api_key = config.api_key()?;
            let client = HttpGenerationClient::new(&config.service, api_key)?;

            let mut pipeline = ScreeningPipeline::new(Arc::new(client))
                .with_model_label(config.service.model.clone())
                .with_progress(output_format == config::OutputFormat::Console);

            let report = pipeline.run(&resumes, &job).await?;

            let generator = ReportGenerator::new(config.output.color_output);
            println!("{}", generator.format(&report, &output_format)?);

            if let Some(path) = save {
                generator.save(&report, &output_format, &path)?;
                info!("Report saved to {}", path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Endpoint: {}", config.service.endpoint);
                println!("Model: {}", config.service.model);
                println!("Temperature: {}", config.service.temperature);
                println!("Max tokens: {}", config.service.max_tokens);
                println!("Timeout: {}s", config.service.timeout_secs);
                println!("API key env var: {}", config.service.api_key_env);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
