use pgmstego::pgm::Dimensions;

use crate::cmd::ExtractArgs;
use crate::exit::{pipeline_error, CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: ExtractArgs, format: OutputFormat) -> CliResult<i32> {
    let dimensions = Dimensions::new(args.width, args.height);
    let report = pgmstego::pipeline::extract_file(&args.stego, &args.output, dimensions)
        .map_err(pipeline_error)?;
    print_report(&report, format);
    Ok(SUCCESS)
}
