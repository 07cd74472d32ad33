use crate::core::TextSource;
use crate::utils::error::{DrillError, Result};

/// 以空白切分，回傳最長的 token；長度相同時取先出現者
pub fn longest_word(text: &str) -> Option<&str> {
    text.split_whitespace()
        .fold(None, |best: Option<(&str, usize)>, token| {
            let len = token.chars().count();
            match best {
                Some((_, best_len)) if best_len >= len => best,
                _ => Some((token, len)),
            }
        })
        .map(|(token, _)| token)
}

pub struct LongestWordFinder<L: TextSource, R: TextSource> {
    local: L,
    remote: R,
}

impl<L: TextSource, R: TextSource> LongestWordFinder<L, R> {
    pub fn new(local: L, remote: R) -> Self {
        Self { local, remote }
    }

    /// 讀取整份文件後找出最長的單字
    pub async fn find(&self, locator: &str, remote: bool) -> Result<String> {
        let text = if remote {
            self.remote.read_text(locator).await?
        } else {
            self.local.read_text(locator).await?
        };
        tracing::debug!("Read {} bytes from {}", text.len(), locator);

        longest_word(&text)
            .map(str::to_string)
            .ok_or_else(|| DrillError::NoTokens {
                source_name: locator.to_string(),
            })
    }
}
