use std::io;

use sendblue::{ApiRequest, Credentials, SendblueClient};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let number = std::env::var("SENDBLUE_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDBLUE_NUMBER environment variable is required",
        )
    })?;
    let content = std::env::var("SENDBLUE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sendblue demo.".to_owned());

    let client = SendblueClient::new(Credentials::from_env()?);
    let request = ApiRequest::post("/api/send-message").with_payload(json!({
        "number": number,
        "content": content,
    }));

    match client.call(request).await {
        Ok(response) => println!(
            "status: {}, messageHandle: {}",
            response["status"], response["messageHandle"]
        ),
        Err(err) => {
            if let Some(cause) = err.api_cause() {
                eprintln!(
                    "{}: HTTP {} {:?}",
                    err.kind(),
                    cause.status,
                    cause.message
                );
            }
            return Err(err.into());
        }
    }

    Ok(())
}
