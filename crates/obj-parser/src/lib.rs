//! Wavefront OBJ reader.
//!
//! Parses the `o`, `v`, `vt`, `vn` and triangular `f` statements of an OBJ
//! file into an [`ObjDocument`]. Malformed statements are dropped and parsing
//! carries on with the next line.

mod document;
mod obj;

pub use document::{
    Face, Normal, ObjDocument, Position, TextureCoordinate, VertexReference, ABSENT_INDEX,
};
pub use obj::{
    deserialize, DeserializeError, Deserialized, InternalInconsistency, ObjDeserializer,
    ObjFile, ParseOptions, SkippedStatement, StatementError, VertexReferenceMode,
};
