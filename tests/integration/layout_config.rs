use anyhow::Result;

use multiotp_launcher::lib::errors::CONFIG_EXIT_CODE;

use crate::common::{serial, Installation, EXIT_ENV};

#[test]
fn config_file_relocates_companions() -> Result<()> {
    let _guard = serial();
    let installation = Installation::bare("App")?;
    installation.install_interpreter("runtime/bin/php")?;
    installation.write_config(
        "[launcher]\ninterpreter = \"runtime/bin/php\"\nscript = \"runtime/multiotp.php\"\n",
    )?;

    let status = installation.command().env(EXIT_ENV, "5").status()?;
    assert_eq!(status.code(), Some(5), "unexpected status {status:?}");

    let invocation = installation.invocation()?;
    assert_eq!(
        invocation.args[0],
        installation
            .root
            .join("runtime/multiotp.php")
            .display()
            .to_string()
    );
    Ok(())
}

#[test]
fn invalid_config_stops_before_launch() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;
    installation.write_config("[launcher]\nscript = \"/etc/passwd\"\n")?;

    let output = installation.command().output()?;
    assert_eq!(
        output.status.code(),
        Some(CONFIG_EXIT_CODE),
        "unexpected output {output:?}"
    );
    assert!(
        !installation.record.exists(),
        "interpreter must not have run"
    );
    Ok(())
}

#[test]
fn logging_is_opt_in() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;

    let quiet = installation.command().output()?;
    assert!(quiet.stderr.is_empty(), "{:?}", String::from_utf8_lossy(&quiet.stderr));

    let verbose = installation
        .command()
        .env("MULTIOTP_LAUNCHER_LOG", "debug")
        .output()?;
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("Completed launch"), "{stderr}");
    assert!(stderr.contains("-base-dir="), "{stderr}");
    Ok(())
}
