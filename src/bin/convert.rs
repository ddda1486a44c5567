// src/bin/convert.rs

use pathprep::{cli, logging, run_convert};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("convert error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse_convert();
    logging::init_logging(args.log_level)?;
    run_convert(args)
}
