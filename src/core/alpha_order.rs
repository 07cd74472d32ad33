/// 每個單字的字母（忽略大小寫與非字母）都是遞增或遞減排列
pub fn is_alpha_order(text: &str) -> bool {
    text.split_whitespace().all(word_in_order)
}

fn word_in_order(word: &str) -> bool {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    letters.windows(2).all(|w| w[0] <= w[1]) || letters.windows(2).all(|w| w[0] >= w[1])
}
