use std::env;

use pacenote::cli;
use pacenote::logging::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run_with_args(&args));
}
