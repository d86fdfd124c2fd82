use crate::{edge, graph::Graph};

/// A -- B -- C with a direct but longer A -- C
pub fn triangle() -> Graph<&'static str> {
    Graph::from_edges(vec![
        edge!("A", "B", 1.0),
        edge!("B", "C", 2.0),
        edge!("A", "C", 5.0),
    ])
}

/// A -- B   C -- D
pub fn two_components() -> Graph<&'static str> {
    Graph::from_edges(vec![edge!("A", "B", 1.0), edge!("C", "D", 2.0)])
}

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -- A -- C
    //      |  /
    //      D
    let (a, b, c, d, e) = (0, 1, 2, 3, 4);

    Graph::from_edges(vec![
        edge!(a, c, 1.0),
        edge!(a, d, 1.0),
        edge!(e, a, 1.0),
        edge!(c, b, 1.0),
        edge!(c, d, 1.0),
    ])
}

pub fn generate_complex_graph() -> Graph {
    let (a, b, c, d, e, f, g, h, i, j, k) = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);

    Graph::from_edges(vec![
        edge!(a, b, 3.0), // A <=> B
        edge!(a, c, 5.0), // A <=> C
        edge!(a, k, 3.0), // A <=> K
        edge!(b, d, 5.0), // B <=> D
        edge!(b, c, 3.0), // B <=> C
        edge!(c, d, 2.0), // C <=> D
        edge!(c, j, 2.0), // C <=> J
        edge!(d, j, 4.0), // D <=> J
        edge!(d, e, 7.0), // D <=> E
        edge!(e, j, 3.0), // E <=> J
        edge!(e, f, 6.0), // E <=> F
        edge!(f, h, 2.0), // F <=> H
        edge!(f, g, 4.0), // F <=> G
        edge!(g, h, 3.0), // G <=> H
        edge!(g, i, 5.0), // G <=> I
        edge!(h, i, 3.0), // H <=> I
        edge!(h, j, 2.0), // H <=> J
        edge!(i, j, 4.0), // I <=> J
        edge!(i, k, 6.0), // I <=> K
        edge!(j, k, 3.0), // J <=> K
    ])
}
