use anyhow::Result;

use multiotp_launcher::lib::errors::PATH_RESOLUTION_EXIT_CODE;

use crate::common::{serial, Installation, EXIT_ENV};

#[test]
fn child_exit_status_is_propagated() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;

    let status = installation.command().env(EXIT_ENV, "7").status()?;
    assert_eq!(status.code(), Some(7), "unexpected status {status:?}");
    Ok(())
}

#[test]
fn child_success_is_propagated() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;

    let status = installation.command().env(EXIT_ENV, "0").status()?;
    assert_eq!(status.code(), Some(0), "unexpected status {status:?}");
    Ok(())
}

#[test]
fn missing_interpreter_reports_os_error_code() -> Result<()> {
    let _guard = serial();
    let installation = Installation::bare("App")?;

    let output = installation.command().output()?;
    // ENOENT
    assert_eq!(output.status.code(), Some(2), "unexpected output {output:?}");
    assert!(output.stdout.is_empty());
    assert!(
        !installation.record.exists(),
        "interpreter must not have run"
    );
    Ok(())
}

#[test]
fn path_resolution_exit_code_is_distinct_from_child_codes() {
    assert_ne!(PATH_RESOLUTION_EXIT_CODE, 0);
    assert_ne!(PATH_RESOLUTION_EXIT_CODE, 2);
}
