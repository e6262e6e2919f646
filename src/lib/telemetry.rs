//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "MULTIOTP_LAUNCHER_LOG";
/// Identifier the launcher reports for itself.
pub const SOFTWARE: &str = "LAUNCHPHPMULTIOTP";

/// Initialize `tracing` on stderr. Silent unless `MULTIOTP_LAUNCHER_LOG` is set.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a single launch.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
}

impl LaunchSpan {
    /// Start a launch span.
    pub fn start(interpreter: &str, forwarded_args: usize) -> Self {
        let span = info_span!(
            target: "multiotp_launcher::launch",
            "launch",
            software = SOFTWARE,
            version = env!("CARGO_PKG_VERSION"),
            interpreter,
            forwarded_args
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Enter the span for the duration of the returned guard.
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: i32) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "multiotp_launcher::launch",
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed launch"
        );
    }
}
