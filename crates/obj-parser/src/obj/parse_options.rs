/// How many `/`-separated sub-fields a face vertex-field token may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexReferenceMode {
    /// Only the three sub-field form is accepted, e.g. `1/2/3` or `1//3`.
    #[default]
    Strict,
    /// `v`, `v/vt` and `v/vt/vn` are all accepted; missing sub-fields read
    /// as absent.
    Lenient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub vertex_reference_mode: VertexReferenceMode,
    /// Record every dropped statement with the reason it was dropped.
    pub collect_diagnostics: bool,
}

impl ParseOptions {
    pub fn with_vertex_reference_mode(mut self, mode: VertexReferenceMode) -> Self {
        self.vertex_reference_mode = mode;
        self
    }

    pub fn with_diagnostics(mut self, collect_diagnostics: bool) -> Self {
        self.collect_diagnostics = collect_diagnostics;
        self
    }
}
