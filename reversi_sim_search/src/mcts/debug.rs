use super::*;

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeDump<T> {
    #[cfg_attr(feature = "serde", serde(rename = "_"))]
    pub value: T,
    #[cfg_attr(feature = "serde", serde(rename = "children"))]
    pub children: Vec<TreeDump<T>>,
}

impl<T> TreeDump<T> {
    pub fn new(value: T, children: Vec<TreeDump<T>>) -> Self {
        Self { value, children }
    }
}

impl Stats {
    fn format_ratio(self) -> String {
        format!("{self} = {:.2}%", 1e2 * self.ratio())
    }
}

impl NodeData {
    fn debug_description(&self, children_count: usize) -> String {
        let move_part = match (self.mv, self.parent) {
            (Some(mv), _) => mv.square_name(),
            (None, Some(_)) => "[Pass]".to_string(),
            (None, None) => "[Root]".to_string(),
        };
        let score_part = if self.score == f64::MAX {
            "inf".to_string()
        } else {
            format!("{:.3}", self.score)
        };
        format!(
            "{move_part} {} ({}), #children = {children_count}, depth={}, score={score_part}, status={}",
            self.color,
            self.stats.format_ratio(),
            self.depth,
            self.status
        )
    }
}

impl<S: SelectionPolicy, O: SearchObserver> MCTS<S, O> {
    /// Describes the subtree at `token` down to `max_depth` levels.
    pub fn dump_tree(&self, token: Token, max_depth: u8) -> TreeDump<String> {
        if max_depth == 0 {
            return Default::default();
        }

        let Some(node) = self.tree.get(token) else {
            return Default::default();
        };

        let children_count = node.children(&self.tree).count();
        let desc = node.data.debug_description(children_count);
        let children = node
            .children(&self.tree)
            .map(|child| self.dump_tree(child.token(), max_depth - 1))
            .filter(|child| !(child.children.is_empty() && child.value.is_empty()))
            .collect();
        TreeDump::new(desc, children)
    }

    /// Writes the subtree at `token` through `log::debug!`, most visited children first.
    /// Children with fewer than `min_visits` visits are folded into one line per level.
    pub fn log_tree(&self, token: Token, max_depth: u8, min_visits: u32) {
        if log::log_enabled!(log::Level::Debug) {
            self.log_tree_rec(token, 0, max_depth, min_visits);
        }
    }

    fn log_tree_rec(&self, token: Token, depth: u8, max_depth: u8, min_visits: u32) {
        if depth > max_depth {
            return;
        }

        let Some(node) = self.tree.get(token) else {
            return;
        };

        fn indent_prefix(indent_depth: u8) -> String {
            "  ".repeat(indent_depth as usize) + "- "
        }

        let children_count = node.children(&self.tree).count();
        log::debug!(
            "{}{}",
            indent_prefix(depth),
            node.data.debug_description(children_count)
        );
        let mut children: SmallVec<[_; 16]> = node.children(&self.tree).collect();
        children.sort_by_key(|c| std::cmp::Reverse(c.data.stats.visits));
        let mut omitted_stats = Stats::default();
        let mut omitted = 0;
        for child in children {
            let stats = child.data.stats;
            if stats.visits > 0 && stats.visits >= min_visits && depth < max_depth {
                self.log_tree_rec(child.token(), depth + 1, max_depth, min_visits);
            } else {
                omitted += 1;
                omitted_stats += stats;
            }
        }

        if depth < max_depth && omitted > 0 {
            log::debug!(
                "{}...[{omitted} omitted] ({})",
                indent_prefix(depth + 1),
                omitted_stats.format_ratio()
            );
        }
    }
}
