use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pairs=info".parse()?),
        )
        .init();

    pairs::cli::run_build_corpus(std::env::args().skip(1))
}
