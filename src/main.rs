// src/main.rs

use depviz::{cli, failure_message, logging, run};

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("depviz error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run(&args) {
        println!("{}", failure_message(&err));
        std::process::exit(1);
    }
}
