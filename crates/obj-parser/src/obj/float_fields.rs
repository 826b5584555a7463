use super::{InternalInconsistency, StatementError};

/// Parses exactly `N` space separated decimal numbers.
pub fn parse_float_fields<const N: usize>(
    keyword: &'static str,
    remainder: &str,
) -> Result<[f32; N], StatementError> {
    let fields: Vec<&str> = remainder.split(' ').collect();
    if fields.len() != N {
        return Err(StatementError::WrongComponentCount {
            keyword,
            expected: N,
            found: fields.len(),
        });
    }

    let values = fields
        .into_iter()
        .map(parse_float)
        .collect::<Result<Vec<_>, _>>()?;

    <[f32; N]>::try_from(values).map_err(|values| {
        InternalInconsistency::FloatCountMismatch {
            expected: N,
            extracted: values.len(),
        }
        .into()
    })
}

// `f32::from_str` also takes "inf" and "NaN", which are not decimal numbers.
fn parse_float(field: &str) -> Result<f32, StatementError> {
    let is_decimal = !field.is_empty()
        && field
            .bytes()
            .all(|byte| byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return Err(StatementError::InvalidFloatComponent(field.to_owned()));
    }
    field
        .parse::<f32>()
        .map_err(|_| StatementError::InvalidFloatComponent(field.to_owned()))
}
