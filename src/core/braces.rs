use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceError {
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedClose { position: usize },

    #[error("{depth} unclosed '{{' at end of expression")]
    UnmatchedOpen { depth: usize },

    #[error("empty '{{}}' pair at byte {position}")]
    EmptyPair { position: usize },
}

/// 計算 `{}` 的最大巢狀深度
pub fn brace_depth(expr: &str) -> Result<usize, BraceError> {
    let mut depth: usize = 0;
    let mut max_depth = 0;
    let mut prev = None;

    for (position, c) in expr.char_indices() {
        match c {
            '{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            '}' => {
                if prev == Some('{') {
                    return Err(BraceError::EmptyPair {
                        position: position - 1,
                    });
                }
                depth = depth
                    .checked_sub(1)
                    .ok_or(BraceError::UnmatchedClose { position })?;
            }
            _ => {}
        }
        prev = Some(c);
    }

    if depth != 0 {
        return Err(BraceError::UnmatchedOpen { depth });
    }
    Ok(max_depth)
}

/// 與 `brace_depth` 相同，但任何錯誤都回傳 -1
pub fn max_nested_braces(expr: &str) -> i32 {
    match brace_depth(expr) {
        Ok(depth) => i32::try_from(depth).unwrap_or(i32::MAX),
        Err(e) => {
            tracing::debug!("'{}' rejected: {}", expr, e);
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_expressions() {
        assert_eq!(max_nested_braces("a*b"), 0);
        assert_eq!(max_nested_braces("a*{b+c}"), 1);
        assert_eq!(max_nested_braces("{a+2}*{b+c}"), 1);
        assert_eq!(max_nested_braces("a*{b+c*{e*3.14}}"), 2);
        assert_eq!(max_nested_braces("{{a+2}*{b+c}+e}"), 2);
        assert_eq!(max_nested_braces("{{a+2}*{b+{c*d}}+e}"), 3);
        assert_eq!(max_nested_braces("{{a+2}*{{b+{c*d}}+e*d}}"), 4);
    }

    #[test]
    fn test_unbalanced_expressions() {
        assert_eq!(max_nested_braces("a*b{"), -1);
        assert_eq!(max_nested_braces("a*{b+c*{e*3.14}}}"), -1);
        assert_eq!(max_nested_braces("a*{b+c}}"), -1);
        assert_eq!(max_nested_braces("}a+b{"), -1);
        assert_eq!(max_nested_braces("{{a+2}*{{b}+{c*d}}+e*d}}"), -1);
    }

    #[test]
    fn test_empty_pairs() {
        assert_eq!(max_nested_braces("a*b+{}"), -1);
        assert_eq!(max_nested_braces("a*{b+{}+c*{e*3.14}}"), -1);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            brace_depth("}a+b{"),
            Err(BraceError::UnmatchedClose { position: 0 })
        );
        assert_eq!(brace_depth("{{a}"), Err(BraceError::UnmatchedOpen { depth: 1 }));
        assert_eq!(brace_depth("a*b+{}"), Err(BraceError::EmptyPair { position: 4 }));
    }
}
