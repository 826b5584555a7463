/// Index value standing for a sub-field missing from the source.
pub const ABSENT_INDEX: i32 = -1;

/// One corner of a face: `position/texture/normal`, 1-based.
///
/// Indices are stored as read and are not checked against the length of the
/// collections they point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexReference {
    pub position: i32,
    pub texture: i32,
    pub normal: i32,
}

impl VertexReference {
    pub fn position_index(&self) -> Option<i32> {
        present(self.position)
    }

    pub fn texture_index(&self) -> Option<i32> {
        present(self.texture)
    }

    pub fn normal_index(&self) -> Option<i32> {
        present(self.normal)
    }
}

fn present(index: i32) -> Option<i32> {
    (index != ABSENT_INDEX).then_some(index)
}

impl From<[i32; 3]> for VertexReference {
    fn from([position, texture, normal]: [i32; 3]) -> Self {
        Self {
            position,
            texture,
            normal,
        }
    }
}

/// A triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face(pub [VertexReference; 3]);

impl Face {
    pub fn vertices(&self) -> &[VertexReference; 3] {
        &self.0
    }
}

impl From<[VertexReference; 3]> for Face {
    fn from(vertices: [VertexReference; 3]) -> Self {
        Self(vertices)
    }
}

impl From<[[i32; 3]; 3]> for Face {
    fn from(vertices: [[i32; 3]; 3]) -> Self {
        Self(vertices.map(VertexReference::from))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sentinel_maps_to_none() {
        let reference = VertexReference::from([4, ABSENT_INDEX, 6]);
        assert_eq!(reference.position_index(), Some(4));
        assert_eq!(reference.texture_index(), None);
        assert_eq!(reference.normal_index(), Some(6));
    }

    #[test]
    fn zero_is_not_the_absent_marker() {
        let reference = VertexReference::from([0, 0, 0]);
        assert_eq!(reference.texture_index(), Some(0));
    }
}
