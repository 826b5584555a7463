use rs42::extensions::PipeLine;

use crate::{
    document::{VertexReference, ABSENT_INDEX},
    obj::{InternalInconsistency, StatementError, VertexReferenceMode},
};

const SUB_FIELD_COUNT: usize = 3;

pub fn parse_vertex_reference(
    token: &str,
    mode: VertexReferenceMode,
) -> Result<VertexReference, StatementError> {
    let sub_fields: Vec<&str> = if token.is_empty() {
        Vec::new()
    } else {
        token.split('/').collect()
    };
    check_sub_field_count(token, sub_fields.len(), mode)?;

    let indices = (0..SUB_FIELD_COUNT)
        .map(|i| parse_index(sub_fields.get(i).copied()))
        .collect::<Result<Vec<_>, _>>()?;

    <[i32; SUB_FIELD_COUNT]>::try_from(indices)
        .map_err(|indices| InternalInconsistency::IndexCountMismatch {
            expected: SUB_FIELD_COUNT,
            extracted: indices.len(),
        })?
        .pipe(VertexReference::from)
        .pipe(Ok)
}

fn check_sub_field_count(
    token: &str,
    found: usize,
    mode: VertexReferenceMode,
) -> Result<(), StatementError> {
    let is_valid = match mode {
        VertexReferenceMode::Lenient => (1..=SUB_FIELD_COUNT).contains(&found),
        VertexReferenceMode::Strict => found == SUB_FIELD_COUNT,
    };
    if !is_valid {
        return Err(StatementError::WrongSubComponentCount {
            token: token.to_owned(),
            found,
        });
    }
    Ok(())
}

fn parse_index(sub_field: Option<&str>) -> Result<i32, StatementError> {
    match sub_field {
        None | Some("") => Ok(ABSENT_INDEX),
        Some(sub_field) => sub_field
            .parse::<i32>()
            .map_err(StatementError::InvalidSubComponentInFace),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_token_is_not_a_reference() {
        assert_eq!(
            parse_vertex_reference("", VertexReferenceMode::Lenient),
            Err(StatementError::WrongSubComponentCount {
                token: String::new(),
                found: 0,
            })
        );
    }

    #[test]
    fn indices_are_kept_as_written() {
        assert_eq!(
            parse_vertex_reference("+12/0/-3", VertexReferenceMode::Strict),
            Ok(VertexReference {
                position: 12,
                texture: 0,
                normal: -3,
            })
        );
    }

    #[test]
    fn rejects_non_integer_indices() {
        for token in ["1.5//1", "0x1//1", "1 //1", "//a"] {
            assert!(
                matches!(
                    parse_vertex_reference(token, VertexReferenceMode::Lenient),
                    Err(StatementError::InvalidSubComponentInFace(_))
                ),
                "{token} should not parse"
            );
        }
    }
}
