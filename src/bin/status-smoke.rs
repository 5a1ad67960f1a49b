use status_check_api::smoke::{DEFAULT_CLIENT_NAME, SmokeClient, resolve_base_url};
use status_check_api::telemetry::init_tracing;
use std::process::ExitCode;

/// Runs the black-box checks against a live instance and exits non-zero on
/// any failure.
#[tokio::main]
async fn main() -> ExitCode {
    init_tracing("info");

    let base_url = match resolve_base_url() {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%base_url, "Running smoke checks");

    let client = match SmokeClient::new(base_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = client.run(DEFAULT_CLIENT_NAME).await;
    println!("{}", report);

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
