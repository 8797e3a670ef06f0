use std::io;

use sendblue::{ApiRequest, Credentials, SendblueClient};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceLookup {
    number: String,
    service: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Already percent-encoded, e.g. `%2B15551234567`.
    let number = std::env::var("SENDBLUE_NUMBER_ENCODED").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDBLUE_NUMBER_ENCODED environment variable is required",
        )
    })?;

    let client = SendblueClient::new(Credentials::from_env()?);
    let lookup: ServiceLookup = client
        .call_as(ApiRequest::get(format!(
            "/api/evaluate-service?number={number}"
        )))
        .await?;

    println!("{} is reachable via {}", lookup.number, lookup.service);
    Ok(())
}
