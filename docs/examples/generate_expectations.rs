// Writes the full fixture stream to stdout.
//
//   cargo run --example generate_expectations > expectations.txt
//
// Progress goes to stderr; set RUST_LOG=debug to see one event per scenario.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("generate_expectations failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> std::io::Result<()> {
    let stdout = std::io::stdout();
    simdref::scenario::write_stream(std::io::BufWriter::new(stdout.lock()))
}
