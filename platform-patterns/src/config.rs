//! Runtime configuration.

use std::fmt;
use std::path::PathBuf;

use crate::dataset::DEFAULT_DATAFILE;
use crate::lookup::LookupClientConfig;

/// Environment variable that turns on debug mode.
pub const DEBUG_ENV: &str = "PLATFORM_PATTERNS_DEBUG";

/// Environment variable overriding the lookup API base URL.
pub const API_URL_ENV: &str = "VBB_API_URL";

/// How pattern colours are entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorPolicy {
    /// Multi-select from the fixed named palette
    #[default]
    Palette,
    /// Type hex colours one at a time, most prominent first
    Hex,
}

impl fmt::Display for ColorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorPolicy::Palette => f.write_str("palette"),
            ColorPolicy::Hex => f.write_str("hex"),
        }
    }
}

/// Configuration for one run of the tool.
#[derive(Debug, Clone)]
pub struct Config {
    /// NDJSON file entries are appended to.
    pub datafile: PathBuf,

    /// Colour entry policy for this run.
    pub color_policy: ColorPolicy,

    /// Live lookup API settings.
    pub lookup: LookupClientConfig,

    /// Serve lookups from this fixture instead of the live API.
    pub mock_data: Option<PathBuf>,

    /// Log full error details.
    pub debug: bool,
}

impl Config {
    pub fn new(datafile: impl Into<PathBuf>) -> Self {
        Self {
            datafile: datafile.into(),
            color_policy: ColorPolicy::default(),
            lookup: LookupClientConfig::new(),
            mock_data: None,
            debug: false,
        }
    }

    pub fn with_color_policy(mut self, policy: ColorPolicy) -> Self {
        self.color_policy = policy;
        self
    }

    pub fn with_lookup(mut self, lookup: LookupClientConfig) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn with_mock_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.mock_data = Some(path.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATAFILE)
    }
}

/// Interpret the debug environment variable. Unset, empty, `0` and `false`
/// are off; anything else is on.
pub fn debug_enabled(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}
