use crate::geom::{direction, Node};

/// Unordered triple of boundary nodes produced by graph reduction.
///
/// Equality ignores vertex order.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    nodes: [Node; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Node, b: Node, c: Node) -> Self {
        Self { nodes: [a, b, c] }
    }

    #[inline]
    pub fn nodes(&self) -> [Node; 3] {
        self.nodes
    }

    #[inline]
    pub fn has_node(&self, n: Node) -> bool {
        self.nodes.contains(&n)
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.nodes;
        direction(b, a, c).abs() / 2.0
    }

    /// Same-sign test over the three directed edges; points on an edge are inside.
    pub fn contains(&self, p: Node) -> bool {
        let [a, b, c] = self.nodes;
        let d = [direction(p, a, b), direction(p, b, c), direction(p, c, a)];
        let has_neg = d.iter().any(|&v| v < 0.0);
        let has_pos = d.iter().any(|&v| v > 0.0);
        !(has_neg && has_pos)
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.iter().all(|n| other.has_node(*n))
            && other.nodes.iter().all(|n| self.has_node(*n))
    }
}
