//! Parallel Query Evaluation
//!
//! Uses Rayon to run independent queries over the same context at once.
//! Trees are only read, so sharing them across threads needs no locking.

use rayon::prelude::*;

use crate::dom::XmlNode;
use crate::query::{Query, Selector};

/// Run `find` for every selector in parallel. Results follow selector order.
pub fn find_all<'a>(query: &Query<'a>, selectors: &[Selector<'_>]) -> Vec<Query<'a>> {
    selectors
        .par_iter()
        .map(|selector| query.find(selector))
        .collect()
}

/// Run `has` for every selector in parallel. Results follow selector order.
pub fn has_all(query: &Query<'_>, selectors: &[Selector<'_>]) -> Vec<bool> {
    selectors
        .par_iter()
        .map(|selector| query.has(selector))
        .collect()
}

/// Parallel [`Query::map`]. `f` may run concurrently and in any order;
/// results follow context order.
pub fn par_map<'a, F, T>(query: &Query<'a>, f: F) -> Vec<T>
where
    F: Fn(&'a XmlNode, usize, &[&'a XmlNode]) -> T + Sync + Send,
    T: Send,
{
    let nodes = query.nodes();
    nodes
        .par_iter()
        .enumerate()
        .map(|(index, &node)| f(node, index, nodes))
        .collect()
}
