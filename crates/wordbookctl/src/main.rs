// # wordbookctl - Wordbook CLI
//
// One-shot command that appends a word to the configured remote notebook.
//
// This is a THIN integration layer:
// 1. Reading configuration from environment variables
// 2. Initializing tracing and the runtime
// 3. Running one collect operation through wordbook-core
//
// All collect logic lives in wordbook-core; do not add merging, retry, or
// classification logic here.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `WORDBOOK_AUTH_TOKEN`: Maimemo open API token (required)
// - `WORDBOOK_NOTEBOOK_ID`: id of the target cloud notebook (required)
// - `WORDBOOK_API_BASE`: API base URL (default: https://open.maimemo.com/open/api/v1)
// - `WORDBOOK_API`: API shape, `notepad` or `vocabulary` (default: notepad)
// - `WORDBOOK_SOURCE`: attribution tag for the vocabulary endpoint
// - `WORDBOOK_TIMEOUT_SECS`: HTTP timeout in seconds (default: 30)
// - `WORDBOOK_LOG_LEVEL`: trace|debug|info|warn|error (default: info)
//
// ## Example
//
// ```bash
// export WORDBOOK_AUTH_TOKEN=your_token
// export WORDBOOK_NOTEBOOK_ID=12345
//
// wordbookctl serendipity
// ```

use anyhow::Result;
use std::env;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use wordbook_core::{ApiKind, CollectConfig, Collector, Credentials};
use wordbook_transport_reqwest::ReqwestTransport;

/// Exit codes for different termination scenarios
///
/// - 0: Word collected
/// - 1: Configuration or usage error
/// - 2: The remote operation failed
#[derive(Debug, Clone, Copy)]
enum CliExitCode {
    /// Word collected successfully
    Success = 0,
    /// Configuration error or bad usage
    ConfigError = 1,
    /// The collect operation failed
    SyncError = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    auth_token: String,
    notebook_id: String,
    api_base: Option<String>,
    api: String,
    source: Option<String>,
    timeout_secs: Option<u64>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        Self {
            auth_token: env::var("WORDBOOK_AUTH_TOKEN").unwrap_or_default(),
            notebook_id: env::var("WORDBOOK_NOTEBOOK_ID").unwrap_or_default(),
            api_base: env::var("WORDBOOK_API_BASE").ok(),
            api: env::var("WORDBOOK_API").unwrap_or_else(|_| "notepad".to_string()),
            source: env::var("WORDBOOK_SOURCE").ok(),
            timeout_secs: env::var("WORDBOOK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
            log_level: env::var("WORDBOOK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Validate the configuration
    ///
    /// Checks required variables, enumerated values, and numeric ranges, and
    /// catches obvious placeholder tokens.
    fn validate(&self) -> Result<()> {
        if self.auth_token.is_empty() {
            anyhow::bail!(
                "WORDBOOK_AUTH_TOKEN is required. \
                Set it via: export WORDBOOK_AUTH_TOKEN=your_token"
            );
        }

        // Check for obvious placeholder tokens (common mistake)
        let token_lower = self.auth_token.to_lowercase();
        if token_lower.contains("your_token")
            || token_lower.contains("replace_me")
            || token_lower == "token"
        {
            anyhow::bail!(
                "WORDBOOK_AUTH_TOKEN appears to be a placeholder. \
                Use an actual token from the Maimemo open platform."
            );
        }

        if self.notebook_id.is_empty() {
            anyhow::bail!(
                "WORDBOOK_NOTEBOOK_ID is required. \
                Set it via: export WORDBOOK_NOTEBOOK_ID=12345"
            );
        }

        match self.api.as_str() {
            "notepad" | "vocabulary" => {}
            other => anyhow::bail!(
                "WORDBOOK_API '{}' is not supported. \
                Supported shapes: notepad, vocabulary",
                other
            ),
        }

        if let Some(ref api_base) = self.api_base
            && !api_base.starts_with("https://")
            && !api_base.starts_with("http://")
        {
            anyhow::bail!(
                "WORDBOOK_API_BASE must use HTTP or HTTPS scheme. Got: {}",
                api_base
            );
        }

        if let Some(timeout) = self.timeout_secs
            && !(1..=300).contains(&timeout)
        {
            anyhow::bail!(
                "WORDBOOK_TIMEOUT_SECS must be between 1 and 300 seconds. Got: {}",
                timeout
            );
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => anyhow::bail!(
                "WORDBOOK_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                other
            ),
        }

        Ok(())
    }

    /// Build the core configuration out of the validated environment
    fn to_collect_config(&self) -> CollectConfig {
        let mut config = CollectConfig::new(Credentials::new(
            self.auth_token.clone(),
            self.notebook_id.clone(),
        ));

        if let Some(ref api_base) = self.api_base {
            config.api_base = api_base.clone();
        }
        if self.api == "vocabulary" {
            config.api = ApiKind::Vocabulary;
        }
        if let Some(ref source) = self.source {
            config.source = source.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }

        config
    }
}

fn main() -> ExitCode {
    // The word is the single positional argument
    let args: Vec<String> = env::args().skip(1).collect();
    let word = match args.as_slice() {
        [word] if !word.trim().is_empty() => word.clone(),
        _ => {
            eprintln!("Usage: wordbookctl <word>");
            return CliExitCode::ConfigError.into();
        }
    };

    // Load and validate configuration from environment
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return CliExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CliExitCode::ConfigError.into();
    }

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return CliExitCode::SyncError.into();
        }
    };

    let result = rt.block_on(async {
        match run(&config, &word).await {
            Ok(()) => CliExitCode::Success,
            Err(e) => {
                error!("Collect failed: {}", e);
                CliExitCode::SyncError
            }
        }
    });

    result.into()
}

/// Run one collect operation
async fn run(config: &Config, word: &str) -> Result<()> {
    let collect_config = config.to_collect_config();

    let transport =
        ReqwestTransport::with_timeout(Duration::from_secs(collect_config.timeout_secs))?;

    info!(
        "Collecting \"{}\" into notebook {}",
        word, collect_config.credentials.notebook_id
    );

    let collector = Collector::new(collect_config, Box::new(transport));
    collector.collect(word).await?;

    info!("Word collected successfully");
    Ok(())
}
