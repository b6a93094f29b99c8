use bs_options::cli;
use bs_options::config::{AppConfig, RunMode};
use bs_options::models::black_scholes::BlackScholes;
use bs_options::models::OptionPricer;

fn main() {
    // Structured logging on stderr so it never interleaves with the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    // A mode argument overrides CALC_MODE
    let mode = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<RunMode>() {
            Ok(m) => m,
            Err(e) => {
                tracing::error!("{e}");
                eprintln!("usage: bs_options [menu|interactive|demo]");
                std::process::exit(2);
            }
        },
        None => cfg.mode,
    };

    let pricer = BlackScholes::new();
    tracing::info!(?mode, model = pricer.name(), format = ?cfg.output_format, "calculator starting");

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = cli::run(mode, &cfg, &pricer, &mut reader, &mut out) {
        tracing::error!(error = %e, "calculator aborted");
        eprintln!("Unexpected error: {e}");
        std::process::exit(1);
    }
}
