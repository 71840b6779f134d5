use super::*;

pub struct SelectionPolicyContext<'a> {
    pub config: &'a MCTSConfig,
    pub parent: &'a NodeData,
}

/// Scores the children of an expanded node during selection.
/// The child with the highest score is descended into.
///
/// See also: <https://en.wikipedia.org/wiki/Monte_Carlo_tree_search#Exploration_and_exploitation>
pub trait SelectionPolicy: Send + Sync {
    /// Selection score of `child`. Unvisited children should score `f64::MAX`.
    fn score(&self, ctx: &SelectionPolicyContext, child: &NodeData) -> f64;
}

/// Upper confidence bound applied to trees:
/// `ratio + C * sqrt(ln(N_parent) / N_child)`.
#[derive(Debug, Default, Copy, Clone)]
pub struct UCT;

impl SelectionPolicy for UCT {
    #[inline]
    fn score(&self, ctx: &SelectionPolicyContext, child: &NodeData) -> f64 {
        let n = child.stats.visits;
        if n == 0 {
            return f64::MAX;
        }
        let n_parent = ctx.parent.stats.visits.max(1) as f64;
        child.stats.ratio() + ctx.config.exploration * (n_parent.ln() / n as f64).sqrt()
    }
}
