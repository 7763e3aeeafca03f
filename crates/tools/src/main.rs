use std::env;
use std::ffi::OsString;
use std::io;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<OsString> = env::args_os().collect();
    let mut out = io::stdout().lock();
    if let Err(e) = sez_to_ecef::run(&args, &mut out) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
