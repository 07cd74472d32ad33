use crate::core::Value;
use crate::utils::error::{DrillError, Result, INTEGER_ONLY};

/// 計算整數的十進位位數，忽略正負號
pub fn len_int(value: &Value) -> Result<usize> {
    match value {
        Value::Int(n) => Ok(n.magnitude().to_string().len()),
        other => {
            tracing::debug!("len_int rejected {} input", other.type_name());
            Err(DrillError::type_mismatch(INTEGER_ONLY))
        }
    }
}
