use pgmstego::PipelineConfig;

use crate::cmd::RunArgs;
use crate::exit::{config_error, pipeline_error, CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: RunArgs, format: OutputFormat) -> CliResult<i32> {
    let config = resolve_config(args)?;
    tracing::debug!(?config, "resolved pipeline config");

    let report = pgmstego::pipeline::run(&config).map_err(pipeline_error)?;
    print_report(&report, format);
    Ok(SUCCESS)
}

fn resolve_config(args: RunArgs) -> CliResult<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path).map_err(config_error)?,
        None => PipelineConfig::default(),
    };

    if let Some(cover) = args.cover {
        config.cover_path = cover;
    }
    if let Some(secret) = args.secret {
        config.secret_path = secret;
    }
    if let Some(stego) = args.stego {
        config.stego_path = stego;
    }
    if let Some(extracted) = args.extracted {
        config.extracted_path = extracted;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.secret_width.is_some() {
        config.secret_width = args.secret_width;
    }
    if args.secret_height.is_some() {
        config.secret_height = args.secret_height;
    }
    Ok(config)
}
