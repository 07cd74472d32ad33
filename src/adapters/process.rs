use crate::core::{CommandOutcome, CommandRunner};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use tokio::process::Command;

/// 出現這些字元就得交給 shell 解譯
const SHELL_METACHARACTERS: &[char] = &[
    '*', '?', '{', '}', '[', ']', '<', '>', '(', ')', '~', '&', '|', '\\', '$', ';', '\'', '"',
    '`', '\n', '#', '=', '%',
];

/// shell 的保留字與特殊內建命令，無法直接 exec
const SHELL_KEYWORDS: &[&str] = &[
    "!", ".", ":", "break", "case", "continue", "do", "done", "elif", "else", "esac", "eval",
    "exec", "exit", "export", "fi", "for", "if", "in", "readonly", "return", "set", "shift",
    "then", "times", "trap", "until", "unset", "while",
];

/// 執行命令，stdout/stderr 直接沿用目前的終端
///
/// 單純的 `程式 參數...` 會直接啟動，找不到程式時回報「未執行」；
/// 其他情況透過 `sh -c` 交給 shell，這時 127 只是一般的失敗結束碼。
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    shell: String,
}

impl ShellCommandRunner {
    pub fn new<S: Into<String>>(shell: S) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    async fn spawn(mut command: Command, shown: &str) -> Result<CommandOutcome> {
        match command.status().await {
            Ok(status) => Ok(CommandOutcome::exited(status.code())),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                tracing::debug!("Could not start '{}': {}", shown, e);
                Ok(CommandOutcome::not_spawned())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

/// 不需要 shell 的命令拆成 argv
fn direct_argv(command: &str) -> Option<Vec<&str>> {
    if command.contains(SHELL_METACHARACTERS) {
        return None;
    }
    let argv: Vec<&str> = command.split_whitespace().collect();
    match argv.first() {
        Some(program) if !SHELL_KEYWORDS.contains(program) => Some(argv),
        _ => None,
    }
}

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn run(&self, command: &str) -> Result<CommandOutcome> {
        let process = match direct_argv(command) {
            Some(argv) => {
                let mut process = Command::new(argv[0]);
                process.args(&argv[1..]);
                process
            }
            None => {
                let mut process = Command::new(&self.shell);
                process.arg("-c").arg(command);
                process
            }
        };
        Self::spawn(process, command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_commands_skip_the_shell() {
        assert_eq!(direct_argv("ls -l out.txt"), Some(vec!["ls", "-l", "out.txt"]));
        assert_eq!(direct_argv("  true "), Some(vec!["true"]));
    }

    #[test]
    fn test_shell_syntax_goes_through_the_shell() {
        for command in [
            "exit 127",
            "grep \"foo\" out.txt",
            "echo $HOME",
            "ls | wc -l",
            "FOO=1 env",
            "if true; then false; fi",
            ": noop",
            "",
        ] {
            assert_eq!(direct_argv(command), None, "{:?}", command);
        }
    }
}
