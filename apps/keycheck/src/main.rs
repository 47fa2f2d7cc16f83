//! License key validator.
//!
//! Prompts for a license key on stdin, validates it with the Keygen API, and prints one
//! result line. Exits 0 whenever the API gave an answer (valid or not), 1 when it didn't.
//!
//! Usage:
//!   keycheck [--account ID] [--api-url URL] [--timeout-secs N]
//!
//! Environment variables:
//!   KEYGEN_ACCOUNT_ID   - Keygen account ID (flag: --account)
//!   KEYGEN_API_URL      - API base URL (default: https://api.keygen.sh)
//!   KEYGEN_TIMEOUT_SECS - Request timeout, 0 for none (default: 10)
//!   RUST_LOG            - Log filter for stderr diagnostics (default: warn)

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use keycheck_lib::config::timeout_from_secs;
use keycheck_lib::report::{EXIT_FAILURE, EXIT_SUCCESS};
use keycheck_lib::{ClientConfig, Outcome, ValidationClient, ValidationError, prompt, report};

/// Flags override the matching environment variables; anything not passed comes from
/// [`ClientConfig::from_env`].
#[derive(Debug, Parser)]
#[command(version, about = "Validate a license key against the Keygen licensing API")]
struct Args {
    /// Keygen account ID [env: KEYGEN_ACCOUNT_ID]
    #[arg(long = "account", value_name = "ID")]
    account_id: Option<String>,

    /// Base URL of the licensing API [env: KEYGEN_API_URL, default: https://api.keygen.sh]
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Request timeout in seconds, 0 to wait indefinitely [env: KEYGEN_TIMEOUT_SECS, default: 10]
    #[arg(long, value_name = "N")]
    timeout_secs: Option<u64>,
}

impl Args {
    fn apply_to(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(account_id) = self.account_id {
            config.account_id = account_id;
        }
        if let Some(api_url) = self.api_url.filter(|v| !v.trim().is_empty()) {
            config.api_url = api_url;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = timeout_from_secs(secs);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout only ever carries the prompt and the result line
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    ExitCode::from(run(args.apply_to(ClientConfig::from_env())).await)
}

async fn run(config: ClientConfig) -> u8 {
    if let Err(e) = prompt::write_prompt(io::stdout()) {
        let _ = writeln!(io::stderr(), "Failed to prompt for license key: {e}");
        return EXIT_FAILURE;
    }

    let key = match prompt::read_license_key(io::stdin().lock()) {
        Ok(key) => key,
        Err(e) => {
            let _ = writeln!(io::stderr(), "Failed to read license key: {e}");
            return EXIT_FAILURE;
        }
    };

    match validate(&config, &key).await {
        Ok(outcome) => {
            if let Err(e) = report::write_outcome(io::stdout().lock(), &outcome) {
                log::error!("Failed to write result: {e}");
                return EXIT_FAILURE;
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            let _ = report::write_error(io::stderr().lock(), &e);
            EXIT_FAILURE
        }
    }
}

/// Validates `key`, giving up early on Ctrl-C.
async fn validate(config: &ClientConfig, key: &str) -> Result<Outcome, ValidationError> {
    let client = ValidationClient::new(config)?;

    let cancel = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Couldn't listen for Ctrl-C, validation can't be cancelled: {e}");
            std::future::pending::<()>().await;
        }
    };

    let response = client.validate_until(key, cancel).await?;
    Ok(response.into_outcome())
}
