//! Complete-link agglomerative clustering of scored viewpoint candidates.
//!
//! A viewpoint search produces many candidate solutions, most of them near
//! duplicates. Clustering the scored population into a binary merge tree
//! lets a host browse results at any granularity: cut the tree high for a
//! few diverse representatives, low for the full population.
//!
//! The candidate type belongs to the external solver; this module only reads
//! a borrowed slice of them through the [`Candidate`] trait. Tree nodes live
//! in an id-indexed arena, with parent links as plain back-reference ids so
//! the tree has a single ownership path from the root down.

use log::debug;

/// A scored candidate solution, as produced by the external solver.
pub trait Candidate {
    /// Current score of the candidate.
    fn evaluation(&self) -> f64;

    /// Best score the candidate has reached historically.
    fn best_evaluation(&self) -> f64;

    /// Distance to another candidate. With `use_best` the metric is taken
    /// between the historically best positions rather than the current ones.
    fn distance(&self, other: &Self, use_best: bool) -> f64;
}

/// Index of a node in the clustering arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterId(pub usize);

/// One node of the cluster tree.
#[derive(Clone, Debug)]
pub struct ClusterNode {
    /// Representative candidate (index into the clustered slice): the
    /// highest-scoring representative among the node's children.
    pub candidate: usize,
    /// The two merged child clusters, or `None` for a leaf.
    pub children: Option<[ClusterId; 2]>,
    /// Back-reference for upward traversal, `None` for the root.
    pub parent: Option<ClusterId>,
    /// Complete-link distance at which this cluster was formed (0 for
    /// leaves).
    pub max_distance: f64,
}

impl ClusterNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Agglomerative hierarchical clustering of a candidate population.
///
/// Complete link: the distance between two clusters is the maximum pairwise
/// distance between their leaf candidates. Each round recomputes the full
/// distance matrix and merges the globally closest pair, so a build is
/// O(k³) over the k filtered candidates — fine for the small populations a
/// viewpoint search produces, not meant for large-scale clustering.
pub struct HierarchicalClustering<'a, C: Candidate> {
    candidates: &'a [C],
    nodes: Vec<ClusterNode>,
    root: Option<ClusterId>,
}

impl<'a, C: Candidate> HierarchicalClustering<'a, C> {
    /// Clusters every candidate whose score reaches `min_sat`.
    ///
    /// `use_best` selects which score variant drives the filter, the
    /// distance metric and representative selection: the historical best or
    /// the current evaluation. With no surviving candidate the result has no
    /// root; with one it is a single leaf.
    pub fn build(candidates: &'a [C], min_sat: f64, use_best: bool) -> Self {
        let score = |c: &C| {
            if use_best {
                c.best_evaluation()
            } else {
                c.evaluation()
            }
        };

        let mut nodes = Vec::new();
        let mut active: Vec<ClusterId> = Vec::new();

        for (i, c) in candidates.iter().enumerate() {
            if score(c) >= min_sat {
                active.push(ClusterId(nodes.len()));
                nodes.push(ClusterNode {
                    candidate: i,
                    children: None,
                    parent: None,
                    max_distance: 0.0,
                });
            }
        }

        debug!("{} candidates passed the satisfaction filter", active.len());

        while active.len() > 1 {
            let distances = distance_matrix(candidates, &nodes, &active, use_best);

            // Closest pair, row-major scan; strict < keeps the first
            // minimum found, so ties resolve deterministically.
            let mut c1 = 0;
            let mut c2 = 0;
            let mut min_distance = f64::INFINITY;
            for i in 0..active.len() {
                for j in 0..i {
                    if distances[i][j] < min_distance {
                        c1 = i;
                        c2 = j;
                        min_distance = distances[i][j];
                    }
                }
            }

            // The merged cluster is represented by the higher-scoring
            // child's representative; on equal scores the earlier cluster
            // in the active list wins.
            let value1 = score(&candidates[nodes[active[c1].0].candidate]);
            let value2 = score(&candidates[nodes[active[c2].0].candidate]);
            let winner = if value1 > value2 { c1 } else { c2 };

            let parent = ClusterId(nodes.len());
            let representative = nodes[active[winner].0].candidate;
            nodes.push(ClusterNode {
                candidate: representative,
                children: Some([active[c1], active[c2]]),
                parent: None,
                max_distance: min_distance,
            });
            nodes[active[c1].0].parent = Some(parent);
            nodes[active[c2].0].parent = Some(parent);

            active.push(parent);
            // c1 > c2, so removing c1 first keeps c2's index valid
            active.remove(c1);
            active.remove(c2);
        }

        let root = active.first().copied();
        Self { candidates, nodes, root }
    }

    /// Root of the tree, `None` when no candidate passed the filter.
    pub fn root(&self) -> Option<ClusterId> {
        self.root
    }

    pub fn node(&self, id: ClusterId) -> &ClusterNode {
        &self.nodes[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Representative candidate of a cluster.
    pub fn representative(&self, id: ClusterId) -> &'a C {
        &self.candidates[self.nodes[id.0].candidate]
    }

    /// All candidates in a cluster: the leaves of its subtree, left to
    /// right.
    pub fn candidates_in_cluster(&self, id: ClusterId) -> Vec<&'a C> {
        let mut leaves = Vec::new();
        collect_leaves(&self.nodes, id, &mut leaves);
        leaves.into_iter().map(|i| &self.candidates[i]).collect()
    }

    /// Representatives `level` hops below a cluster.
    ///
    /// Level 0 is the cluster's own representative; subtrees shallower than
    /// `level` contribute their leaves.
    pub fn candidates_at_level(&self, id: ClusterId, level: usize) -> Vec<&'a C> {
        let mut result = Vec::new();
        self.collect_at_level(id, level, &mut result);
        result
    }

    /// Visits every node's representative, depth first, children in storage
    /// order.
    pub fn traverse<F: FnMut(&'a C)>(&self, id: ClusterId, visitor: &mut F) {
        let node = &self.nodes[id.0];
        visitor(&self.candidates[node.candidate]);
        if let Some(children) = node.children {
            for child in children {
                self.traverse(child, visitor);
            }
        }
    }

    /// Complete-link distance between two clusters: the maximum pairwise
    /// candidate distance across their leaf sets.
    pub fn cluster_distance(&self, a: ClusterId, b: ClusterId, use_best: bool) -> f64 {
        leaf_set_distance(self.candidates, &self.nodes, a, b, use_best)
    }

    fn collect_at_level(&self, id: ClusterId, level: usize, out: &mut Vec<&'a C>) {
        let node = &self.nodes[id.0];
        match node.children {
            Some(children) if level > 0 => {
                for child in children {
                    self.collect_at_level(child, level - 1, out);
                }
            }
            _ => out.push(&self.candidates[node.candidate]),
        }
    }
}

/// Symmetric pairwise distance matrix over the active clusters; the diagonal
/// is +infinity so a cluster never merges with itself.
fn distance_matrix<C: Candidate>(
    candidates: &[C],
    nodes: &[ClusterNode],
    active: &[ClusterId],
    use_best: bool,
) -> Vec<Vec<f64>> {
    let k = active.len();
    let mut distances = vec![vec![-1.0; k]; k];

    for i in 0..k {
        for j in 0..k {
            if distances[i][j] < 0.0 {
                if i == j {
                    distances[i][j] = f64::INFINITY;
                } else {
                    let d = leaf_set_distance(candidates, nodes, active[i], active[j], use_best);
                    distances[i][j] = d;
                    distances[j][i] = d;
                }
            }
        }
    }

    distances
}

fn leaf_set_distance<C: Candidate>(
    candidates: &[C],
    nodes: &[ClusterNode],
    a: ClusterId,
    b: ClusterId,
    use_best: bool,
) -> f64 {
    let mut leaves = Vec::new();
    collect_leaves(nodes, a, &mut leaves);
    let mut other_leaves = Vec::new();
    collect_leaves(nodes, b, &mut other_leaves);

    let mut distance = 0.0;
    for &i in &leaves {
        for &j in &other_leaves {
            let d = candidates[i].distance(&candidates[j], use_best);
            if d > distance {
                distance = d;
            }
        }
    }

    distance
}

fn collect_leaves(nodes: &[ClusterNode], id: ClusterId, out: &mut Vec<usize>) {
    match nodes[id.0].children {
        None => out.push(nodes[id.0].candidate),
        Some(children) => {
            for child in children {
                collect_leaves(nodes, child, out);
            }
        }
    }
}
