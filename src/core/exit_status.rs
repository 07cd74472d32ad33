use crate::core::{CommandOutcome, CommandRunner};
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnValue {
    Success,
    Failure,
    NotRun,
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnValue::Success => write!(f, "true"),
            ReturnValue::Failure => write!(f, "false"),
            ReturnValue::NotRun => write!(f, "nil"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    pub command: String,
    pub return_value: ReturnValue,
    pub exit_code: Option<i32>,
}

impl CommandReport {
    pub fn from_outcome(command: &str, outcome: CommandOutcome) -> Self {
        let return_value = match outcome {
            CommandOutcome { spawned: false, .. } => ReturnValue::NotRun,
            CommandOutcome {
                exit_code: Some(0),
                ..
            } => ReturnValue::Success,
            // 被 signal 中止時沒有結束碼
            _ => ReturnValue::Failure,
        };
        Self {
            command: command.to_string(),
            return_value,
            exit_code: outcome.exit_code,
        }
    }

    /// 命令執行前印出的那一行
    pub fn header(command: &str) -> String {
        format!("Command: {}", command)
    }

    /// 命令結束後印出的結果與分隔線
    pub fn status_lines(&self) -> String {
        let status = self.exit_code.map(|c| c.to_string()).unwrap_or_default();
        format!(
            "system return value: {}\nCommand exit status: {}\n{}",
            self.return_value,
            status,
            "-".repeat(30)
        )
    }
}

impl fmt::Display for CommandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::header(&self.command))?;
        write!(f, "{}", self.status_lines())
    }
}

/// 依序執行每個命令並回報結果
///
/// 標題在命令啟動前就寫出並 flush，子程序的輸出會夾在標題與結果之間。
pub async fn report_commands<R, W>(
    runner: &R,
    commands: &[String],
    out: &mut W,
) -> Result<Vec<CommandReport>>
where
    R: CommandRunner + ?Sized,
    W: Write + Send + ?Sized,
{
    let mut reports = Vec::with_capacity(commands.len());
    for command in commands {
        writeln!(out, "{}", CommandReport::header(command))?;
        out.flush()?;

        tracing::debug!("Running command: {}", command);
        let outcome = runner.run(command).await?;
        let report = CommandReport::from_outcome(command, outcome);
        tracing::info!(
            "{} -> {} (exit {:?})",
            command,
            report.return_value,
            report.exit_code
        );

        writeln!(out, "{}", report.status_lines())?;
        out.flush()?;
        reports.push(report);
    }
    Ok(reports)
}
