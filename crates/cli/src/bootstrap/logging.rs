use ferrous_doh_domain::ClientConfig;

pub fn init_logging(config: &ClientConfig) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    // stdout is reserved for the query result
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .init();
}
