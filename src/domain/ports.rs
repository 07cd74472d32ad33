use crate::utils::error::Result;
use async_trait::async_trait;

/// 找不到命令時回報的結束碼，與 shell 一致
pub const COMMAND_NOT_FOUND: i32 = 127;

/// 取得整份文字內容的來源（本機檔案或遠端 URL）
pub trait TextSource: Send + Sync {
    fn read_text(&self, locator: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// 命令執行完的結果
///
/// `spawned` 為 false 表示程序根本沒啟動；`exit_code` 為 None 表示被 signal 終止
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: Option<i32>,
    pub spawned: bool,
}

impl CommandOutcome {
    pub fn exited(exit_code: Option<i32>) -> Self {
        Self {
            exit_code,
            spawned: true,
        }
    }

    pub fn not_spawned() -> Self {
        Self {
            exit_code: Some(COMMAND_NOT_FOUND),
            spawned: false,
        }
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> Result<CommandOutcome>;
}
