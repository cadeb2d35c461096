use std::io;

use driver::database::MemoryStore;
use error_stack::{Report, ResultExt};
use kernel::KernelError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::AppConfig;
use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::seed::seed_demo_data;
use crate::shell::Shell;

mod config;
mod controller;
mod error;
mod handler;
mod menu;
mod request;
mod response;
mod seed;
mod shell;

fn main() -> Result<(), StackTrace> {
    let config = AppConfig::from_env()?;

    let appender = tracing_appender::rolling::daily(config.log_dir(), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new();
    if config.seed_demo() {
        seed_demo_data::<MemoryStore, _>(app.library())
            .attach_printable_lazy(|| "Failed to seed demo data")?;
    }

    let stdin = io::stdin();
    Shell::new(app, stdin.lock(), io::stdout())
        .run()
        .map_err(|e| Report::new(e).change_context(KernelError::Internal))?;

    Ok(())
}
