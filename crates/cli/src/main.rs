use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ferrous_doh_application::ports::TracingLogger;
use ferrous_doh_application::use_cases::QueryFacade;
use ferrous_doh_domain::{
    assert_valid_request, ClientConfig, CliOverrides, QueryOptions, QueryRequest, RecordType,
};
use ferrous_doh_infrastructure::doh::DohClient;
use ferrous_doh_infrastructure::transport::ReqwestTransport;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "JSON DNS-over-HTTPS lookup client")]
struct Cli {
    /// Domain name to resolve
    name: String,

    /// DNS record type
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Request DNSSEC data (DO bit)
    #[arg(long)]
    dnssec: bool,

    /// Disable DNSSEC checking (CD bit)
    #[arg(long)]
    disable_checking: bool,

    /// EDNS client subnet, e.g. 192.0.2.0/24
    #[arg(long, value_name = "SUBNET")]
    subnet: Option<String>,

    /// Random padding appended to the request URL
    #[arg(long, value_name = "STRING")]
    padding: Option<String>,

    /// Print the provider response without translation
    #[arg(long)]
    raw: bool,

    /// Validate the request before sending it
    #[arg(long)]
    validate: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Resolver endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        endpoint_url: cli.endpoint.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = ClientConfig::load(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let options = QueryOptions {
        disable_checking: cli.disable_checking.then_some(true),
        dnssec: cli.dnssec.then_some(true),
        edns_client_subnet: cli.subnet.clone(),
        random_padding: cli.padding.clone(),
        ..QueryOptions::default()
    };

    if cli.validate {
        let mut request = QueryRequest::new(cli.name.clone(), cli.record_type);
        request.disable_checking = options.disable_checking;
        request.dnssec = options.dnssec;
        request.edns_client_subnet = options.edns_client_subnet.clone();
        request.random_padding = options.random_padding.clone();

        assert_valid_request(&request)?;
    }

    let transport = Arc::new(ReqwestTransport::with_timeout(Duration::from_secs(
        config.endpoint.timeout_secs,
    )));
    let client = DohClient::new(transport)
        .with_endpoint(config.endpoint.url.clone())
        .with_logger(Arc::new(TracingLogger));
    let facade = QueryFacade::new(Arc::new(client));

    info!(name = %cli.name, record_type = %cli.record_type, "resolving");

    if cli.raw {
        let document = facade.query_raw(&cli.name, cli.record_type, options).await?;
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        let response = facade.query(&cli.name, cli.record_type, options).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
