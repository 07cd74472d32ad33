use crate::utils::error::Result;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

/// 呼叫端傳進來的任意值；型別檢查由各個 drill 自己負責
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(BigInt),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
    Bool(bool),
    Nil,
}

impl Value {
    /// CLI 參數：能解析成整數就是 Int（不限位數），其餘一律當字串
    pub fn from_cli_token(token: &str) -> Self {
        match token.parse::<BigInt>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Str(token.to_string()),
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(json.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(|i| Value::Int(BigInt::from(i)))
                .or_else(|| n.as_u64().map(|u| Value::Int(BigInt::from(u))))
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Nil),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(BigInt::from(n))
                }
            }
        )*
    };
}

value_from_int!(i128, i64, i32);

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Int => write!(f, "Integer"),
            NumberKind::Float => write!(f, "Float"),
        }
    }
}

/// 整數（任意精度）或浮點數，保留數值種類
#[derive(Debug, Clone)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Int(_) => NumberKind::Int,
            Number::Float(_) => NumberKind::Float,
        }
    }

    pub fn is_int(&self) -> bool {
        self.kind() == NumberKind::Int
    }

    pub fn is_float(&self) -> bool {
        self.kind() == NumberKind::Float
    }

    /// 超出 f64 範圍的整數會變成 ±inf
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => i.to_f64().unwrap_or(f64::NAN),
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) if x.is_finite() && x.abs() >= 1e16 => write!(f, "{:e}", x),
            // 整數值的浮點數仍顯示小數點，避免和 Int 混淆
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a * b),
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::Int(BigInt::from(n))
                }
            }

            impl PartialEq<$t> for Number {
                fn eq(&self, other: &$t) -> bool {
                    *self == Number::from(*other)
                }
            }

            impl Add<$t> for Number {
                type Output = Number;

                fn add(self, rhs: $t) -> Number {
                    self + Number::from(rhs)
                }
            }
        )*
    };
}

number_from_int!(i128, i64, i32, u32, u64, usize);

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}
