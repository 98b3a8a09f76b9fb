use pgmstego::pgm::read_header;

use crate::cmd::InfoArgs;
use crate::exit::{pgm_error, CliResult, SUCCESS};
use crate::output::{print_header, OutputFormat};

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let header = read_header(&args.path)
        .map_err(|err| pgm_error(&format!("failed reading {}", args.path.display()), err))?;
    print_header(&args.path, &header, format);
    Ok(SUCCESS)
}
