use crate::document::ObjDocument;

use super::{float_fields::parse_float_fields, StatementError};

// Normals are stored as written, not normalized.
pub fn parse_normal_line(
    remainder: &str,
    document: &mut ObjDocument,
) -> Result<(), StatementError> {
    let normal = parse_float_fields::<3>("vn", remainder)?;
    document.add_normal(normal);
    Ok(())
}
