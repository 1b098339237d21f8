use std::io;

use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG controls table tracing; off by default so gameplay output
    // stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
