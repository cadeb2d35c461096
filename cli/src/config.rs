use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use kernel::KernelError;

static LOG_DIR: &str = "LIBRARY_LOG_DIR";
static SEED_DEMO: &str = "LIBRARY_SEED_DEMO";
static LOG_FILTER: &str = "RUST_LOG";

const DEFAULT_LOG_DIR: &str = "./logs/";
const DEFAULT_LOG_FILTER: &str = "application=debug,cli=debug";

/// Settings read from the environment. A `.env` file in the working directory is honoured.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AppConfig {
    log_dir: PathBuf,
    log_filter: String,
    seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let log_dir = lookup(LOG_DIR).map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from);
        let log_filter = lookup(LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let seed_demo = match lookup(SEED_DEMO) {
            None => true,
            Some(value) => parse_flag(&value)
                .attach_printable_lazy(|| format!("{SEED_DEMO}={value:?}"))?,
        };
        Ok(Self {
            log_dir,
            log_filter,
            seed_demo,
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn seed_demo(&self) -> bool {
        self.seed_demo
    }
}

fn parse_flag(value: &str) -> error_stack::Result<bool, KernelError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Report::new(KernelError::Validation)
            .attach_printable("expected a boolean flag such as true or false")),
    }
}
