use anyhow::Result;

use crate::common::{serial, Installation};

fn base_dir_option(installation: &Installation) -> String {
    format!("-base-dir={}/.", installation.root.display())
}

fn script_path(installation: &Installation) -> String {
    installation
        .root
        .join("php/multiotp.windows.php")
        .display()
        .to_string()
}

#[test]
fn forwards_arguments_in_order_after_script_and_base_dir() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;

    let output = installation.command().args(["-user", "alice"]).output()?;
    assert!(output.status.success(), "launcher failed: {output:?}");

    let invocation = installation.invocation()?;
    assert_eq!(
        invocation.args,
        vec![
            script_path(&installation),
            base_dir_option(&installation),
            "-user".to_string(),
            "alice".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn zero_arguments_forward_only_script_and_base_dir() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;

    let output = installation.command().output()?;
    assert!(output.status.success(), "launcher failed: {output:?}");

    let invocation = installation.invocation()?;
    assert_eq!(
        invocation.args,
        vec![script_path(&installation), base_dir_option(&installation)]
    );
    Ok(())
}

#[test]
fn spaces_and_quotes_survive_verbatim() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("Program Files/multi OTP")?;

    let output = installation
        .command()
        .args(["first arg", "say \"hi\"", "", "it's"])
        .output()?;
    assert!(output.status.success(), "launcher failed: {output:?}");

    let invocation = installation.invocation()?;
    assert_eq!(invocation.args[0], script_path(&installation));
    assert_eq!(invocation.args[1], base_dir_option(&installation));
    assert_eq!(
        &invocation.args[2..],
        &["first arg", "say \"hi\"", "", "it's"]
    );
    Ok(())
}

#[test]
fn launcher_flags_are_not_interpreted() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;

    let output = installation
        .command()
        .args(["--", "--help", "--version", "-V"])
        .output()?;
    assert!(output.status.success(), "launcher failed: {output:?}");
    assert!(
        output.stdout.is_empty(),
        "launcher must not print anything of its own: {:?}",
        String::from_utf8_lossy(&output.stdout)
    );

    let invocation = installation.invocation()?;
    assert_eq!(&invocation.args[2..], &["--", "--help", "--version", "-V"]);
    Ok(())
}

#[test]
fn interpreter_runs_in_launcher_directory() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("Program Files/App")?;

    let output = installation.command().output()?;
    assert!(output.status.success(), "launcher failed: {output:?}");

    let invocation = installation.invocation()?;
    assert_eq!(invocation.cwd, installation.root);
    Ok(())
}

#[test]
fn repeated_launches_pass_identical_arguments() -> Result<()> {
    let _guard = serial();
    let installation = Installation::new("App")?;

    installation.command().args(["-check"]).output()?;
    let first = installation.invocation()?;
    installation.command().args(["-check"]).output()?;
    let second = installation.invocation()?;

    assert_eq!(first.args, second.args);
    assert_eq!(first.cwd, second.cwd);
    Ok(())
}
