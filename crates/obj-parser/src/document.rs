mod face;

pub use face::{Face, VertexReference, ABSENT_INDEX};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureCoordinate {
    pub u: f32,
    pub v: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    pub i: f32,
    pub j: f32,
    pub k: f32,
}

impl From<[f32; 3]> for Position {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 2]> for TextureCoordinate {
    fn from([u, v]: [f32; 2]) -> Self {
        Self { u, v }
    }
}

impl From<[f32; 3]> for Normal {
    fn from([i, j, k]: [f32; 3]) -> Self {
        Self { i, j, k }
    }
}

/// The parsed content of one OBJ source.
///
/// Every collection keeps the order its statements appeared in, so the
/// 1-based indices stored in [`Face`]s refer to these slices.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjDocument {
    source_identifier: String,
    name: Option<String>,
    positions: Vec<Position>,
    texture_coordinates: Vec<TextureCoordinate>,
    normals: Vec<Normal>,
    faces: Vec<Face>,
}


// Constructors:

impl ObjDocument {
    pub(crate) fn new(source_identifier: impl Into<String>) -> Self {
        Self {
            source_identifier: source_identifier.into(),
            name: None,
            positions: Vec::new(),
            texture_coordinates: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }
}


// Mutators, only reachable from the deserializer:

impl ObjDocument {
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub(crate) fn add_position(&mut self, position: impl Into<Position>) {
        self.positions.push(position.into());
    }

    pub(crate) fn add_texture_coordinate(&mut self, coordinate: impl Into<TextureCoordinate>) {
        self.texture_coordinates.push(coordinate.into());
    }

    pub(crate) fn add_normal(&mut self, normal: impl Into<Normal>) {
        self.normals.push(normal.into());
    }

    pub(crate) fn add_face(&mut self, face: impl Into<Face>) {
        self.faces.push(face.into());
    }
}


// Getters:

impl ObjDocument {
    pub fn source_identifier(&self) -> &str {
        &self.source_identifier
    }

    /// Name given by the last `o` statement, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn texture_coordinates(&self) -> &[TextureCoordinate] {
        &self.texture_coordinates
    }

    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}
