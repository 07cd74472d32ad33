/// 每個起點依序列出長度 2 到字尾的子字串
pub fn word_slices(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return if chars.is_empty() {
            Vec::new()
        } else {
            vec![word.to_string()]
        };
    }

    let chars = &chars;
    (0..chars.len() - 1)
        .flat_map(|start| {
            (start + 2..=chars.len())
                .map(move |end| chars[start..end].iter().collect::<String>())
        })
        .collect()
}
