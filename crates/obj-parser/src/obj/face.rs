mod parse_vertex_reference;

use parse_vertex_reference::parse_vertex_reference;

use crate::document::{ObjDocument, VertexReference};

use super::{InternalInconsistency, StatementError, VertexReferenceMode};

const FACE_VERTEX_COUNT: usize = 3;

/// Appends the face only once all of its vertex references parsed.
pub fn parse_face_line(
    remainder: &str,
    mode: VertexReferenceMode,
    document: &mut ObjDocument,
) -> Result<(), StatementError> {
    let tokens: Vec<&str> = remainder.split(' ').collect();
    if tokens.len() != FACE_VERTEX_COUNT {
        return Err(StatementError::WrongVertexReferenceCount(tokens.len()));
    }

    let references = tokens
        .into_iter()
        .map(|token| parse_vertex_reference(token, mode))
        .collect::<Result<Vec<_>, _>>()?;

    let face = <[VertexReference; FACE_VERTEX_COUNT]>::try_from(references).map_err(
        |references| InternalInconsistency::VertexReferenceCountMismatch {
            expected: FACE_VERTEX_COUNT,
            extracted: references.len(),
        },
    )?;

    document.add_face(face);
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::document::{Face, ABSENT_INDEX};

    use super::*;

    fn parse(
        remainder: &str,
        mode: VertexReferenceMode,
    ) -> (ObjDocument, Result<(), StatementError>) {
        let mut document = ObjDocument::new("test.obj");
        let result = parse_face_line(remainder, mode, &mut document);
        (document, result)
    }

    #[test]
    fn full_vertex_references() {
        let (document, result) = parse("1/2/3 4/5/6 7/8/9", VertexReferenceMode::default());
        assert_eq!(result, Ok(()));
        assert_eq!(
            document.faces(),
            [Face::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]])]
        );
    }

    #[test]
    fn empty_texture_sub_field_is_absent() {
        for mode in [VertexReferenceMode::Lenient, VertexReferenceMode::Strict] {
            let (document, result) = parse("1//3 4//6 7//9", mode);
            assert_eq!(result, Ok(()));
            assert_eq!(
                document.faces(),
                [Face::from([
                    [1, ABSENT_INDEX, 3],
                    [4, ABSENT_INDEX, 6],
                    [7, ABSENT_INDEX, 9],
                ])]
            );
        }
    }

    #[test]
    fn short_forms_depend_on_mode() {
        let (document, result) = parse("1 2/5 3/6/", VertexReferenceMode::Lenient);
        assert_eq!(result, Ok(()));
        assert_eq!(
            document.faces(),
            [Face::from([
                [1, ABSENT_INDEX, ABSENT_INDEX],
                [2, 5, ABSENT_INDEX],
                [3, 6, ABSENT_INDEX],
            ])]
        );

        let (document, result) = parse("1 2 3", VertexReferenceMode::default());
        assert_eq!(
            result,
            Err(StatementError::WrongSubComponentCount {
                token: "1".to_owned(),
                found: 1,
            })
        );
        assert!(document.faces().is_empty());
    }

    #[test]
    fn non_numeric_sub_field_drops_the_face() {
        let (document, result) = parse("1/x/3 4/5/6 7/8/9", VertexReferenceMode::default());
        assert!(matches!(
            result,
            Err(StatementError::InvalidSubComponentInFace(_))
        ));
        assert!(document.faces().is_empty());
    }

    #[test]
    fn only_triangles_are_accepted() {
        let (document, result) = parse("1/1/1 2/2/2", VertexReferenceMode::default());
        assert_eq!(result, Err(StatementError::WrongVertexReferenceCount(2)));
        assert!(document.faces().is_empty());

        let (document, result) = parse("1 2 3 4", VertexReferenceMode::default());
        assert_eq!(result, Err(StatementError::WrongVertexReferenceCount(4)));
        assert!(document.faces().is_empty());
    }

    #[test]
    fn too_many_sub_fields_drop_the_face() {
        let (document, result) = parse("1/2/3/4 4/5/6 7/8/9", VertexReferenceMode::default());
        assert_eq!(
            result,
            Err(StatementError::WrongSubComponentCount {
                token: "1/2/3/4".to_owned(),
                found: 4,
            })
        );
        assert!(document.faces().is_empty());
    }
}
