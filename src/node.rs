/// A vertex of the split-node flow graph.
///
/// Each of the `n` data centers is represented by two vertices: data arrives at `In(i)` and leaves
/// from `Out(i)`. The supersource and supersink are appended after them.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub enum Node {
    In(usize),
    Out(usize),
    Source,
    Sink,
}

impl Node {
    /// The arena index of this vertex in a graph built for `n` data centers.
    pub fn index(self, n: usize) -> usize {
        match self {
            Node::In(i) => i,
            Node::Out(i) => i + n,
            Node::Source => 2 * n,
            Node::Sink => 2 * n + 1,
        }
    }

    /// Inverse of [`Node::index`]; `None` if `index` is outside `0..2n+2`.
    pub fn from_index(index: usize, n: usize) -> Option<Self> {
        match index {
            i if i < n => Some(Node::In(i)),
            i if i < 2 * n => Some(Node::Out(i - n)),
            i if i == 2 * n => Some(Node::Source),
            i if i == 2 * n + 1 => Some(Node::Sink),
            _ => None,
        }
    }

    /// The data center this vertex belongs to, if any.
    pub fn data_center(self) -> Option<usize> {
        match self {
            Node::In(i) | Node::Out(i) => Some(i),
            Node::Source | Node::Sink => None,
        }
    }
}

/// Number of arena vertices needed for `n` data centers.
pub const fn vertex_count(n: usize) -> usize {
    2 * n + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_the_split_layout() {
        let n = 4;
        assert_eq!(Node::In(0).index(n), 0);
        assert_eq!(Node::In(3).index(n), 3);
        assert_eq!(Node::Out(0).index(n), 4);
        assert_eq!(Node::Out(3).index(n), 7);
        assert_eq!(Node::Source.index(n), 8);
        assert_eq!(Node::Sink.index(n), 9);
        assert_eq!(vertex_count(n), 10);
    }

    #[test]
    fn from_index_inverts_index() {
        let n = 3;
        for idx in 0..vertex_count(n) {
            let node = Node::from_index(idx, n).unwrap();
            assert_eq!(node.index(n), idx);
        }
        assert_eq!(Node::from_index(vertex_count(n), n), None);
    }

    #[test]
    fn auxiliary_nodes_have_no_data_center() {
        assert_eq!(Node::Out(2).data_center(), Some(2));
        assert_eq!(Node::Source.data_center(), None);
        assert_eq!(Node::Sink.data_center(), None);
    }
}
