mod errors;
mod face;
mod float_fields;
mod handle_unrecognized_line;
mod normal;
mod parse_options;
mod statement;
mod texture;
mod vertex;

pub use errors::{DeserializeError, InternalInconsistency, SkippedStatement, StatementError};
pub use parse_options::{ParseOptions, VertexReferenceMode};

use face::parse_face_line;
use handle_unrecognized_line::handle_unrecognized_line;
use normal::parse_normal_line;
use statement::{split_statement, Statement};
use texture::parse_texture_line;
use vertex::parse_vertex_line;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, debug_span, error, warn};

use crate::document::ObjDocument;

const OBJ_EXTENSION: &str = "obj";

pub struct ObjFile<'a>(pub &'a str);

/// A document along with the statements left out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Deserialized {
    pub document: ObjDocument,
    /// Empty unless [`ParseOptions::collect_diagnostics`] is set.
    pub skipped: Vec<SkippedStatement>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjDeserializer {
    options: ParseOptions,
}

/// Parses the `.obj` file at `path` with the default options.
pub fn deserialize(path: impl AsRef<Path>) -> Result<ObjDocument, DeserializeError> {
    ObjDeserializer::default()
        .deserialize(path)
        .map(|deserialized| deserialized.document)
}

impl TryFrom<ObjFile<'_>> for ObjDocument {
    type Error = DeserializeError;

    fn try_from(file_name: ObjFile) -> Result<Self, Self::Error> {
        deserialize(file_name.0)
    }
}

impl ObjDeserializer {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Fails if `path` does not end in `.obj` (any case) or cannot be opened.
    /// Malformed statements are dropped, never reported as failures.
    pub fn deserialize(&self, path: impl AsRef<Path>) -> Result<Deserialized, DeserializeError> {
        let path = path.as_ref();
        let source_identifier = path.to_string_lossy().into_owned();
        let _span = debug_span!("obj_deserializer", source = %source_identifier).entered();

        if !has_obj_extension(path) {
            warn!("invalid file type");
            return Err(DeserializeError::UnsupportedExtension {
                path: source_identifier,
            });
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                warn!(%source, "requested file could not be opened");
                return Err(DeserializeError::SourceNotFound {
                    path: source_identifier,
                    source,
                });
            }
        };

        self.read_statements(source_identifier, BufReader::new(file))
    }

    /// Runs the same line loop over an already opened source. No extension
    /// check is made.
    pub fn deserialize_reader(
        &self,
        source_identifier: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Deserialized, DeserializeError> {
        let source_identifier = source_identifier.into();
        let _span = debug_span!("obj_deserializer", source = %source_identifier).entered();
        self.read_statements(source_identifier, reader)
    }

    fn read_statements(
        &self,
        source_identifier: String,
        reader: impl BufRead,
    ) -> Result<Deserialized, DeserializeError> {
        let mut parser = Parser::new(source_identifier, self.options);

        for (line_index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DeserializeError::FailedToRead {
                path: parser.document.source_identifier().to_owned(),
                source,
            })?;
            parser.parse_line(line_index + 1, &line)?;
        }

        let deserialized = parser.finish();
        debug!(
            positions = deserialized.document.positions().len(),
            texture_coordinates = deserialized.document.texture_coordinates().len(),
            normals = deserialized.document.normals().len(),
            faces = deserialized.document.faces().len(),
            skipped = deserialized.skipped.len(),
            "deserialized"
        );
        Ok(deserialized)
    }
}

fn has_obj_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case(OBJ_EXTENSION))
}

struct Parser {
    options: ParseOptions,
    document: ObjDocument,
    skipped: Option<Vec<SkippedStatement>>,
}

impl Parser {
    fn new(source_identifier: String, options: ParseOptions) -> Self {
        Self {
            options,
            document: ObjDocument::new(source_identifier),
            skipped: options.collect_diagnostics.then(Vec::new),
        }
    }

    fn finish(self) -> Deserialized {
        Deserialized {
            document: self.document,
            skipped: self.skipped.unwrap_or_default(),
        }
    }

    fn parse_line(&mut self, line_number: usize, line: &str) -> Result<(), DeserializeError> {
        let Some(statement) = split_statement(line) else {
            return Ok(());
        };

        let Err(err) = self.dispatch(&statement, line_number) else {
            return Ok(());
        };
        let reason = escalate_internal_error(line_number, line, err)?;

        debug!(line = line_number, content = line, %reason, "statement skipped");
        if let Some(skipped) = self.skipped.as_mut() {
            skipped.push(SkippedStatement {
                line: line_number,
                content: line.to_owned(),
                reason,
            });
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        statement: &Statement,
        line_number: usize,
    ) -> Result<(), StatementError> {
        let remainder = statement.remainder;
        match statement.keyword.as_str() {
            "o" => {
                self.document.set_name(remainder);
                Ok(())
            }
            "v" => parse_vertex_line(remainder, &mut self.document),
            "vt" => parse_texture_line(remainder, &mut self.document),
            "vn" => parse_normal_line(remainder, &mut self.document),
            "f" => parse_face_line(
                remainder,
                self.options.vertex_reference_mode,
                &mut self.document,
            ),
            keyword => {
                handle_unrecognized_line(keyword, line_number);
                Ok(())
            }
        }
    }
}

/// Internal faults abort the call; any other error only drops the statement.
fn escalate_internal_error(
    line_number: usize,
    line: &str,
    err: StatementError,
) -> Result<StatementError, DeserializeError> {
    match err {
        StatementError::Internal(detail) => {
            error!(line = line_number, content = line, %detail, "internal consistency error");
            Err(DeserializeError::InternalInconsistency {
                line: line_number,
                detail,
            })
        }
        reason => Ok(reason),
    }
}
