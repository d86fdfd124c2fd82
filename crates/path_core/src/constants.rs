/// Edge weight type
pub type Weight = f64;
/// Type of the vertex identifiers read from arc files
pub type VertexId = arc_reader::VertexId;
/// Tentative distance of a vertex not (yet) reached from the source
pub const INFINITY: Weight = f64::INFINITY;
