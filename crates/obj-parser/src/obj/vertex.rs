use crate::document::ObjDocument;

use super::{float_fields::parse_float_fields, StatementError};

pub fn parse_vertex_line(
    remainder: &str,
    document: &mut ObjDocument,
) -> Result<(), StatementError> {
    let position = parse_float_fields::<3>("v", remainder)?;
    document.add_position(position);
    Ok(())
}
