use std::collections::HashMap;
use serde::{Deserialize, Serialize};




/**
 * An undirected multigraph over water columns, stored as aligned edge
 * arrays: `(a[k], b[k])` is the k-th adjacent pair of linear node indexes,
 * `dist[k]` the distance between their centres, and `distperp[k]` the
 * width of the face they share. Parallel edges are allowed; self-loops are
 * not.
 */
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridGraph {
    num_nodes: usize,
    a: Vec<usize>,
    b: Vec<usize>,
    dist: Vec<f64>,
    distperp: Vec<f64>,
}




// ============================================================================
impl GridGraph {


    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, ..Self::default() }
    }


    /**
     * Return the number of nodes (water columns, land included).
     */
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }


    /**
     * Return the number of edges in the graph.
     */
    pub fn len(&self) -> usize {
        self.a.len()
    }


    /**
     * Determine whether there are any edges in the graph.
     */
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }


    /**
     * Insert an edge between nodes a and b. Duplicate edges are allowed.
     */
    pub fn insert(&mut self, a: usize, b: usize, dist: f64, distperp: f64) {
        assert!(a != b, "self-loop at node {}", a);
        assert!(a < self.num_nodes && b < self.num_nodes, "edge ({} {}) out of range", a, b);
        self.a.push(a);
        self.b.push(b);
        self.dist.push(dist);
        self.distperp.push(distperp);
    }


    /**
     * Return the edge endpoints as two aligned sequences.
     */
    pub fn edges(&self) -> (&[usize], &[usize]) {
        (&self.a, &self.b)
    }


    pub fn dist(&self) -> &[f64] {
        &self.dist
    }


    pub fn distperp(&self) -> &[f64] {
        &self.distperp
    }


    /**
     * Determine whether nodes a and b are adjacent, in either orientation.
     */
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.position(a, b).is_some()
    }


    /**
     * Return the index of the first edge joining a and b, in either
     * orientation.
     */
    pub fn position(&self, a: usize, b: usize) -> Option<usize> {
        self.a
            .iter()
            .zip(&self.b)
            .position(|(&x, &y)| (x, y) == (a, b) || (x, y) == (b, a))
    }


    /**
     * Return an iterator over the nodes adjacent to the given node.
     */
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.a.iter().zip(&self.b).filter_map(move |(&a, &b)| {
            if a == node {
                Some(b)
            } else if b == node {
                Some(a)
            } else {
                None
            }
        })
    }


    /**
     * Return the number of edges incident on each node.
     */
    pub fn degrees(&self) -> HashMap<usize, usize> {
        let mut degrees = HashMap::new();

        for (&a, &b) in self.a.iter().zip(&self.b) {
            *degrees.entry(a).or_insert(0) += 1;
            *degrees.entry(b).or_insert(0) += 1;
        }
        degrees
    }


    /**
     * Move the edge arrays out of the graph: `((a, b), dist, distperp)`.
     */
    pub fn into_parts(self) -> ((Vec<usize>, Vec<usize>), Vec<f64>, Vec<f64>) {
        ((self.a, self.b), self.dist, self.distperp)
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::GridGraph;

    #[test]
    fn graph_contains_edges_in_either_orientation() {
        let mut graph = GridGraph::new(4);
        graph.insert(0, 1, 1.0, 2.0);
        assert!(graph.contains(0, 1));
        assert!(graph.contains(1, 0));
        assert!(!graph.contains(0, 2));
    }

    #[test]
    fn graph_keeps_edge_arrays_aligned() {
        let mut graph = GridGraph::new(4);
        graph.insert(0, 1, 1.0, 2.0);
        graph.insert(2, 3, 3.0, 4.0);
        graph.insert(0, 1, 5.0, 6.0);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edges(), (&[0, 2, 0][..], &[1, 3, 1][..]));
        assert_eq!(graph.dist(), &[1.0, 3.0, 5.0]);
        assert_eq!(graph.distperp(), &[2.0, 4.0, 6.0]);
        assert_eq!(graph.position(3, 2), Some(1));
    }

    #[test]
    fn graph_can_iterate_neighbors() {
        let mut graph = GridGraph::new(5);
        graph.insert(0, 1, 1.0, 1.0);
        graph.insert(2, 0, 1.0, 1.0);
        graph.insert(0, 3, 1.0, 1.0);
        graph.insert(4, 1, 1.0, 1.0);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(graph.neighbors(1).count(), 2);
        assert_eq!(graph.degrees()[&0], 3);
    }

    #[test]
    #[should_panic]
    fn graph_rejects_self_loops() {
        GridGraph::new(2).insert(1, 1, 1.0, 1.0);
    }
}
