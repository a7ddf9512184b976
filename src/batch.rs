//! Independent spanning-tree computations on rayon's pool.
//!
//! Each list is built and solved inside its own token scope, so workers share
//! nothing mutable.

use rayon::prelude::*;

use crate::edge_list::EdgeList;
use crate::error::Result;
use crate::prim::MstSummary;

/// Summarizes every list in parallel, preserving input order.
pub fn summarize_all(lists: &[EdgeList]) -> Vec<Result<MstSummary>> {
    lists.par_iter().map(EdgeList::summarize).collect()
}

/// Spanning-tree cost of every list in parallel, preserving input order.
pub fn mst_costs(lists: &[EdgeList]) -> Vec<Result<f64>> {
    lists.par_iter().map(EdgeList::mst_cost).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_matches_sequential() {
        let lists: Vec<_> = (1..=8)
            .map(|n| {
                let body: String = (0..n)
                    .map(|i| format!("{} {} {}\n", i, i + 1, i + 1))
                    .collect();
                EdgeList::parse(&format!("{n}\n{body}")).unwrap()
            })
            .collect();

        let costs = mst_costs(&lists);
        for (list, cost) in lists.iter().zip(costs) {
            assert_eq!(cost, list.mst_cost());
        }
        assert_eq!(summarize_all(&lists)[2].unwrap().total_cost, 6.0);
    }
}
