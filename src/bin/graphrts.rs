// graphrts command-line entry point.
// Usage: graphrts apply leq_integer 3 5

fn main() {
    std::process::exit(graphrts::cli::run());
}
