#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingStyle {
    pub style_char: char,
    pub fill: usize,
}

impl Default for GreetingStyle {
    fn default() -> Self {
        Self {
            style_char: '*',
            fill: 5,
        }
    }
}

impl GreetingStyle {
    pub fn with_style_char(mut self, style_char: char) -> Self {
        self.style_char = style_char;
        self
    }

    pub fn with_fill(mut self, fill: usize) -> Self {
        self.fill = fill;
        self
    }
}

/// 訊息置中，上下各一行裝飾字元
pub fn greeting(msg: &str, style: &GreetingStyle) -> String {
    let width = msg.chars().count() + 2 * style.fill;
    let border: String = std::iter::repeat(style.style_char).take(width).collect();
    format!("{border}\n{msg:^width$}\n{border}")
}
