//! Disjoint-set (merge-find) over the elements `0..n`.
//!
//! Every element holds one signed entry: a non-negative entry is the index of its parent, a
//! negative entry marks a root and stores the negated size of its group. `find` compresses the
//! visited path, `merge` attaches the smaller group under the larger one.
//!
//! Elements outside `0..n` are rejected with [`GraphError::InvalidArgument`].

use crate::utils::NodeVec;
use crate::{GraphError, Result, Vertex};

#[derive(Clone, Debug)]
pub struct DisjointSet {
    entries: NodeVec<i64>,
    num_groups: usize,
}

impl DisjointSet {
    /// `n` singleton groups.
    pub fn new(n: Vertex) -> Self {
        Self {
            entries: node_vec![-1; n],
            num_groups: n as usize,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of disjoint groups, starts at `n` and only decreases.
    pub fn group_count(&self) -> usize {
        self.num_groups
    }

    /// Root of the group containing `x`. Every element visited on the way is re-linked
    /// directly to the root.
    pub fn find(&mut self, x: Vertex) -> Result<Vertex> {
        self.check_element(x)?;
        Ok(self.find_unchecked(x))
    }

    /// Merges the groups of `a` and `b`, which need not be roots.
    ///
    /// Returns `false` if both already belong to the same group; nothing changes then.
    /// On ties in size the root of `a` survives.
    pub fn merge(&mut self, a: Vertex, b: Vertex) -> Result<bool> {
        self.check_element(a)?;
        self.check_element(b)?;
        Ok(self.merge_unchecked(a, b))
    }

    pub fn connected(&mut self, a: Vertex, b: Vertex) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the group containing `x`.
    pub fn group_size(&mut self, x: Vertex) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.entries[root].unsigned_abs() as usize)
    }

    fn check_element(&self, x: Vertex) -> Result<()> {
        if (x as usize) < self.entries.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument {
                node: x,
                num_nodes: self.entries.len() as Vertex,
            })
        }
    }

    /// `find` without the range check, `x` must be an element.
    fn find_unchecked(&mut self, x: Vertex) -> Vertex {
        let mut root = x;
        while self.entries[root] >= 0 {
            root = self.entries[root] as Vertex;
        }

        let mut node = x;
        while node != root {
            let parent = self.entries[node] as Vertex;
            self.entries[node] = root as i64;
            node = parent;
        }

        root
    }

    /// `merge` without the range check, `a` and `b` must be elements.
    pub(crate) fn merge_unchecked(&mut self, a: Vertex, b: Vertex) -> bool {
        let mut root_a = self.find_unchecked(a);
        let mut root_b = self.find_unchecked(b);
        if root_a == root_b {
            return false;
        }

        // sizes are stored negated, so the smaller entry is the larger group
        if self.entries[root_b] < self.entries[root_a] {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        let size_b = self.entries[root_b];
        self.entries[root_b] = root_a as i64;
        self.entries[root_a] += size_b;
        self.num_groups -= 1;

        true
    }

    #[cfg(test)]
    fn count_roots(&self) -> usize {
        self.entries.iter().filter(|&&entry| entry < 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0,1,2,3 under root 0 (with 3 behind 1), 4,5 under root 4, 6 alone.
    fn seven_elements_in_three_groups() -> DisjointSet {
        DisjointSet {
            entries: NodeVec::from_vec(vec![-4, 0, 0, 1, -2, 4, -1]),
            num_groups: 3,
        }
    }

    #[test]
    fn new_set_has_only_singletons() {
        let mut set = DisjointSet::new(7);
        assert_eq!(set.group_count(), 7);
        assert_eq!(set.len(), 7);
        for i in 0..7 {
            assert_eq!(set.find(i), Ok(i));
            assert_eq!(set.group_size(i), Ok(1));
        }
    }

    #[test]
    fn empty_set_has_no_groups() {
        let mut set = DisjointSet::new(0);
        assert!(set.is_empty());
        assert_eq!(set.group_count(), 0);
        assert!(set.find(0).is_err());
    }

    #[test]
    fn find_returns_the_root_of_each_group() {
        let mut set = seven_elements_in_three_groups();
        let roots: Vec<Vertex> = (0..7).map(|i| set.find(i).unwrap()).collect();
        assert_eq!(roots, vec![0, 0, 0, 0, 4, 4, 6]);
    }

    #[test]
    fn find_compresses_the_visited_path() {
        let mut set = seven_elements_in_three_groups();
        assert_eq!(set.entries[3u32], 1);
        set.find(3).unwrap();
        assert_eq!(set.entries[1u32], 0);
        assert_eq!(set.entries[2u32], 0);
        assert_eq!(set.entries[3u32], 0);
        assert_eq!(set.entries[0u32], -4);
    }

    #[test]
    fn merge_attaches_smaller_group_under_larger() {
        let mut set = seven_elements_in_three_groups();
        assert_eq!(set.merge(4, 0), Ok(true));
        for i in 0..6 {
            assert_eq!(set.find(i), Ok(0));
        }
        assert_eq!(set.find(6), Ok(6));
        assert_eq!(set.entries[0u32], -6);
        assert_eq!(set.group_size(5), Ok(6));
        assert_eq!(set.group_count(), 2);
        assert_eq!(set.count_roots(), set.group_count());
    }

    #[test]
    fn merge_after_compression_keeps_sizes() {
        let mut set = seven_elements_in_three_groups();
        set.find(3).unwrap();
        set.find(5).unwrap();
        assert_eq!(set.merge(3, 5), Ok(true));
        assert_eq!(set.group_size(0), Ok(6));
        assert_eq!(set.merge(6, 2), Ok(true));
        assert_eq!(set.group_size(6), Ok(7));
        assert_eq!(set.group_count(), 1);
        assert_eq!(set.count_roots(), 1);
    }

    #[test]
    fn merge_with_itself_changes_nothing() {
        let mut set = seven_elements_in_three_groups();
        let before = set.entries[0u32];
        assert_eq!(set.merge(0, 0), Ok(false));
        assert_eq!(set.merge(1, 3), Ok(false));
        assert_eq!(set.entries[0u32], before);
        assert_eq!(set.group_count(), 3);
    }

    #[test]
    fn successful_merge_decrements_group_count_by_one() {
        let mut set = DisjointSet::new(5);
        assert_eq!(set.merge(0, 1), Ok(true));
        assert_eq!(set.group_count(), 4);
        assert_eq!(set.connected(0, 1), Ok(true));
        assert_eq!(set.connected(1, 2), Ok(false));

        assert_eq!(set.merge(2, 3), Ok(true));
        assert_eq!(set.merge(1, 3), Ok(true));
        assert_eq!(set.group_count(), 2);
        assert_eq!(set.find(0), set.find(2));
        assert_eq!(set.merge(0, 3), Ok(false));
        assert_eq!(set.group_count(), 2);
        assert_eq!(set.count_roots(), 2);
    }

    #[test]
    fn equal_sizes_keep_the_first_root() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.merge(2, 3), Ok(true));
        assert_eq!(set.find(3), Ok(2));
        assert_eq!(set.merge(1, 0), Ok(true));
        assert_eq!(set.find(0), Ok(1));
    }

    #[test]
    fn out_of_range_elements_are_rejected_without_changes() {
        let mut set = DisjointSet::new(3);
        let out_of_range = GraphError::InvalidArgument {
            node: 5,
            num_nodes: 3,
        };
        assert_eq!(set.merge(0, 5), Err(out_of_range.clone()));
        assert_eq!(set.merge(5, 0), Err(out_of_range.clone()));
        assert_eq!(set.find(5), Err(out_of_range));
        assert!(set.connected(3, 0).is_err());
        assert!(set.group_size(3).is_err());
        assert_eq!(set.group_count(), 3);
        assert_eq!(set.count_roots(), 3);
        assert_eq!(set.find(0), Ok(0));
    }

    #[test]
    fn long_chain_unifies_into_one_group() {
        let n: Vertex = 10_000;
        let mut set = DisjointSet::new(n);
        for i in 1..n {
            assert_eq!(set.merge(i, i - 1), Ok(true));
        }
        assert_eq!(set.group_count(), 1);
        assert_eq!(set.group_size(0), Ok(n as usize));
        assert_eq!(set.find(n - 1), set.find(0));
    }
}
