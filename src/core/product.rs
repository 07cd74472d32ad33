use crate::core::Number;
use std::iter::Product;

/// 連乘所有元素；空序列回傳 1
pub fn product<I>(items: I) -> Number
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    items.into_iter().map(Into::<Number>::into).product()
}

impl Product for Number {
    fn product<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(Number::from(1), |acc, n| acc * n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_products() {
        assert_eq!(product([1, 4, 21]), 84);
        assert_eq!(product([-3, 11, 2]), -66);
        assert_eq!(product([8, 300]), 2400);
        assert!(product([8, 300]).is_int());
    }

    #[test]
    fn test_zero_anywhere() {
        assert_eq!(product([234, 121, 23, 945, 0]), 0);
        assert_eq!(product([0, 234, 121]), 0);
    }

    #[test]
    fn test_range() {
        assert_eq!(product(1..=5), 120);
        assert_eq!(product(1..5), 24);
    }

    #[test]
    fn test_large_integer_products_stay_exact() {
        // 34! 已超出 i128
        let result = product(1..=34);
        assert!(result.is_int());
        assert_eq!(
            result.to_string(),
            "295232799039604140847618609643520000000"
        );

        let with_negative = product([i128::MAX, -2]);
        assert!(with_negative.is_int());
        assert_eq!(
            with_negative.to_string(),
            "-340282366920938463463374607431768211454"
        );
    }

    #[test]
    fn test_mixed_promotes_to_float() {
        let items = [
            Number::from(-4),
            Number::from(2.3e12),
            Number::from(77.23),
            Number::from(982),
            Number::from(0b101),
        ];
        let result = product(items);
        assert!(result.is_float());
        let expected = -3.48863356e18;
        assert!(((result.as_f64() - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_is_identity() {
        let empty: Vec<Number> = Vec::new();
        assert_eq!(product(empty), 1);
    }
}
