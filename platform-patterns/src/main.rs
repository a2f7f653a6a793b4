use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use platform_patterns::config::{API_URL_ENV, ColorPolicy, Config, DEBUG_ENV, debug_enabled};
use platform_patterns::dataset::DEFAULT_DATAFILE;
use platform_patterns::lookup::{DEFAULT_BASE_URL, LookupClientConfig};
use platform_patterns::pipeline;

/// Record VBB platform decoration patterns, one NDJSON line per run.
#[derive(Parser, Debug)]
#[command(
    name = "platform-patterns",
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    disable_version_flag = true
)]
struct Cli {
    /// NDJSON data file path
    #[arg(value_name = "DATAFILE", default_value = DEFAULT_DATAFILE)]
    datafile: PathBuf,

    /// Show version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// How pattern colors are entered
    #[arg(long, value_enum, default_value_t = ColorPolicy::Palette)]
    colors: ColorPolicy,

    /// Serve station and line lookups from a JSON fixture instead of the API
    #[arg(long, value_name = "FILE")]
    mock_data: Option<PathBuf>,

    /// Base URL of the VBB REST API
    #[arg(long, value_name = "URL", env = API_URL_ENV, default_value = DEFAULT_BASE_URL)]
    api_url: String,
}

impl Cli {
    fn into_config(self, debug: bool) -> Config {
        let mut config = Config::new(self.datafile)
            .with_color_policy(self.colors)
            .with_lookup(LookupClientConfig::new().with_base_url(self.api_url))
            .with_debug(debug);
        if let Some(path) = self.mock_data {
            config = config.with_mock_data(path);
        }
        config
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug = debug_enabled(std::env::var(DEBUG_ENV).ok().as_deref());
    init_tracing(debug);
    let config = cli.into_config(debug);

    match pipeline::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if config.debug {
                error!(error = ?e, "run failed");
            }
            eprintln!("{}", e.to_string().red());
            let code = u8::try_from(e.exit_code()).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn datafile_defaults() {
        let cli = Cli::try_parse_from(["platform-patterns"]).unwrap();
        assert_eq!(cli.datafile, PathBuf::from("./data.ndjson"));
        assert_eq!(cli.colors, ColorPolicy::Palette);
        assert!(cli.mock_data.is_none());
    }

    #[test]
    fn positional_datafile() {
        let cli = Cli::try_parse_from(["platform-patterns", "x.ndjson"]).unwrap();
        assert_eq!(cli.datafile, PathBuf::from("x.ndjson"));
    }

    #[test]
    fn options_flow_into_config() {
        let cli = Cli::try_parse_from([
            "platform-patterns",
            "--colors",
            "hex",
            "--mock-data",
            "fixture.json",
            "--api-url",
            "http://localhost:3000/",
            "out.ndjson",
        ])
        .unwrap();
        let config = cli.into_config(true);
        assert_eq!(config.datafile, PathBuf::from("out.ndjson"));
        assert_eq!(config.color_policy, ColorPolicy::Hex);
        assert_eq!(config.mock_data, Some(PathBuf::from("fixture.json")));
        assert_eq!(config.lookup.base_url, "http://localhost:3000");
        assert!(config.debug);
    }

    #[test]
    fn unknown_color_policy_rejected() {
        let err = Cli::try_parse_from(["platform-patterns", "--colors", "rainbow"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn version_flags() {
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["platform-patterns", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion, "{flag}");
            assert_eq!(
                err.to_string().trim(),
                concat!("platform-patterns v", env!("CARGO_PKG_VERSION"))
            );
        }
    }

    #[test]
    fn help_flags() {
        for flag in ["-h", "--help"] {
            let err = Cli::try_parse_from(["platform-patterns", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "{flag}");
            assert!(err.to_string().contains("DATAFILE"));
        }
    }
}
