use crate::utils::error::{DrillError, Result};
use std::cmp::Ordering;

/// 未指定名次時取最小值
pub const DEFAULT_RANK: usize = 1;

/// 排序並去除重複後，取第 `n` 小（從 1 起算）的值
pub fn nth_lowest<T: PartialOrd + Clone>(items: &[T], n: usize) -> Result<T> {
    let mut distinct = items.to_vec();
    distinct.sort_by(total_order);
    distinct.dedup_by(|a, b| a == b);

    if n == 0 || n > distinct.len() {
        return Err(DrillError::RankOutOfRange {
            rank: n,
            distinct: distinct.len(),
        });
    }
    Ok(distinct.swap_remove(n - 1))
}

pub fn lowest<T: PartialOrd + Clone>(items: &[T]) -> Result<T> {
    nth_lowest(items, DEFAULT_RANK)
}

pub fn nth_lowest_char(text: &str, n: usize) -> Result<char> {
    let chars: Vec<char> = text.chars().collect();
    nth_lowest(&chars, n)
}

// NaN 之類無法比較的值排在最後，保持排序為全序
fn total_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        let a_ok = a.partial_cmp(a).is_some();
        let b_ok = b.partial_cmp(b).is_some();
        b_ok.cmp(&a_ok)
    })
}
