use anyhow::Result;
use small_drills::core::exit_status::{report_commands, CommandReport, ReturnValue};
use small_drills::core::CommandRunner;
use small_drills::ShellCommandRunner;

#[tokio::test]
async fn test_shell_runner_exit_codes() -> Result<()> {
    let runner = ShellCommandRunner::default();

    assert_eq!(runner.run("exit 0").await?.exit_code, Some(0));
    assert_eq!(runner.run("exit 3").await?.exit_code, Some(3));
    assert_eq!(runner.run("true").await?.exit_code, Some(0));
    assert_eq!(runner.run("false").await?.exit_code, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_exit_127_is_failure_but_missing_program_is_nil() -> Result<()> {
    let runner = ShellCommandRunner::default();

    let exited = CommandReport::from_outcome("exit 127", runner.run("exit 127").await?);
    assert_eq!(exited.return_value, ReturnValue::Failure);
    assert_eq!(exited.exit_code, Some(127));

    let missing = runner.run("small_drills_no_such_command_xyz --flag").await?;
    assert!(!missing.spawned);
    let missing = CommandReport::from_outcome("small_drills_no_such_command_xyz", missing);
    assert_eq!(missing.return_value, ReturnValue::NotRun);
    Ok(())
}

#[tokio::test]
async fn test_report_for_real_commands() -> Result<()> {
    let commands = vec![
        "true".to_string(),
        "exit 1".to_string(),
        "small_drills_no_such_command_xyz".to_string(),
    ];

    let reports =
        report_commands(&ShellCommandRunner::default(), &commands, &mut std::io::sink()).await?;
    let values: Vec<ReturnValue> = reports.iter().map(|r| r.return_value).collect();

    assert_eq!(
        values,
        vec![
            ReturnValue::Success,
            ReturnValue::Failure,
            ReturnValue::NotRun
        ]
    );
    assert_eq!(reports[1].exit_code, Some(1));
    assert_eq!(reports[2].exit_code, Some(127));
    Ok(())
}

#[tokio::test]
async fn test_report_text_layout() -> Result<()> {
    let runner = ShellCommandRunner::default();
    let outcome = runner.run("exit 2").await?;
    let report = CommandReport::from_outcome("exit 2", outcome);

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Command: exit 2");
    assert_eq!(lines[1], "system return value: false");
    assert_eq!(lines[2], "Command exit status: 2");
    assert_eq!(lines[3], "-".repeat(30));
    Ok(())
}
