use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_FILE_NAME};

pub fn log_defaults(path: &std::path::Path) {
    debug!(
        target: "multiotp_launcher::config",
        path = %path.display(),
        file = CONFIG_FILE_NAME,
        "No launcher configuration file; using the default layout"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    let source = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    info!(
        target: "multiotp_launcher::config",
        path = %source,
        interpreter = %config.layout.interpreter.display(),
        script = %config.layout.script.display(),
        "Launcher configuration file loaded successfully"
    );
}
