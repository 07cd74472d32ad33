/// 不分大小寫、長度相同，且最多只有一個位置不同
pub fn is_one_char_diff(first: &str, second: &str) -> bool {
    let a: Vec<char> = first.to_lowercase().chars().collect();
    let b: Vec<char> = second.to_lowercase().chars().collect();

    a.len() == b.len() && a.iter().zip(&b).filter(|(x, y)| x != y).count() <= 1
}
