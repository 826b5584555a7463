use crate::document::ObjDocument;

use super::{float_fields::parse_float_fields, StatementError};

pub fn parse_texture_line(
    remainder: &str,
    document: &mut ObjDocument,
) -> Result<(), StatementError> {
    let coordinate = parse_float_fields::<2>("vt", remainder)?;
    document.add_texture_coordinate(coordinate);
    Ok(())
}
