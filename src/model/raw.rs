use crate::error::ScoreError;

pub fn parse_raw(field: &str, text: &str) -> Result<f64, ScoreError> {
    let invalid = || ScoreError::InvalidNumber {
        field: field.to_string(),
        value: text.to_string(),
    };
    let value = text.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/raw.rs"]
mod tests;
