use pgmstego::pgm::Dimensions;

use crate::cmd::EmbedArgs;
use crate::exit::{pipeline_error, CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: EmbedArgs, format: OutputFormat) -> CliResult<i32> {
    let dimensions = Dimensions::new(args.width, args.height);
    let report =
        pgmstego::pipeline::embed_files(&args.cover, &args.secret, &args.output, dimensions)
            .map_err(pipeline_error)?;
    print_report(&report, format);
    Ok(SUCCESS)
}
