use std::time::Duration;

use instant::Instant;

use atree::{Arena, Token};
use reversi_sim::{
    prelude::*,
    rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng},
    smallvec::SmallVec,
};

use crate::playout::random_playout;

use self::policy::{SelectionPolicy, SelectionPolicyContext, UCT};

pub mod policy;

pub mod stats;
pub use stats::*;

pub mod observer;
pub use observer::*;

pub mod debug;
pub use debug::*;

type Children = SmallVec<[Token; 16]>;

#[derive(Debug, Clone)]
pub struct NodeData {
    /// Position at this node, owned by the node.
    pub board: Board,
    /// Side to move at this node.
    pub color: Side,
    /// Move that produced this node. `None` for the root and for passes.
    pub mv: Option<Move>,
    pub parent: Option<Token>,
    pub depth: u8,
    pub stats: Stats,
    /// Selection score computed the last time the parent was descended through.
    pub score: f64,
    pub status: GameStatus,
}

impl NodeData {
    #[inline]
    pub fn new(board: Board, color: Side, mv: Option<Move>, status: GameStatus) -> Self {
        Self {
            board,
            color,
            mv,
            parent: None,
            depth: 0,
            stats: Default::default(),
            score: 0.0,
            status,
        }
    }

    #[inline]
    fn child_of(parent: Token, parent_depth: u8, board: Board, color: Side, mv: Option<Move>, status: GameStatus) -> Self {
        Self {
            parent: Some(parent),
            depth: parent_depth.saturating_add(1),
            ..Self::new(board, color, mv, status)
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MCTSConfig {
    /// Exploration constant `C` of the UCT formula.
    pub exploration: f64,
    /// Maximum plies per random playout, passes included.
    pub random_playout_cutoff: u32,
    /// Share of the time limit spent searching.
    pub time_budget_fraction: f64,
    /// Log the searched tree at the end of each search.
    pub debug: bool,
    pub limits: Option<SearchLimits>,
}

impl MCTSConfig {
    pub const STANDARD: Self = Self {
        exploration: 10.0,
        random_playout_cutoff: 20,
        time_budget_fraction: 0.95,
        debug: false,
        limits: None,
    };

    /// Used when `limits` is `None`.
    pub const DEFAULT_LIMITS: SearchLimits = SearchLimits {
        max_time: Some(Duration::from_secs(1)),
        max_iterations: None,
    };

    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self {
            limits: Some(limits),
            ..self
        }
    }
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Monte-Carlo Tree Search with margin-weighted backpropagation.
///
/// Each call to `search` builds a fresh tree rooted at the given position; nothing
/// carries over between searches apart from the random number generator state.
pub struct MCTS<S: SelectionPolicy = UCT, O: SearchObserver = NoopObserver> {
    pub config: MCTSConfig,
    pub tree: Arena<NodeData>,
    pub root: Option<Token>,
    pub selection_policy: S,
    pub observer: O,
    rng: SmallRng,
    counter: SearchCounter,
}

impl MCTS {
    pub fn new(config: MCTSConfig, seed: u64) -> Self {
        Self::new_with_selection_policy_and_observer(config, seed, UCT, NoopObserver)
    }
}

impl<O: SearchObserver> MCTS<UCT, O> {
    pub fn new_with_observer(config: MCTSConfig, seed: u64, observer: O) -> Self {
        Self::new_with_selection_policy_and_observer(config, seed, UCT, observer)
    }
}

impl<S: SelectionPolicy, O: SearchObserver> MCTS<S, O> {
    pub fn new_with_selection_policy_and_observer(config: MCTSConfig, seed: u64, selection_policy: S, observer: O) -> Self {
        Self {
            config,
            tree: Arena::new(),
            root: None,
            selection_policy,
            observer,
            rng: SmallRng::seed_from_u64(seed),
            counter: SearchCounter::ZERO,
        }
    }

    /// Counters of the last search.
    pub fn counter(&self) -> SearchCounter {
        self.counter
    }

    /// Drops the tree of the last search.
    pub fn clear(&mut self) {
        self.tree = Arena::new();
        self.root = None;
    }

    fn init(&mut self, board: Board, to_move: Side) -> Token {
        let root = NodeData::new(board, to_move, None, GameStatus::Ongoing);
        let (tree, root_token) = Arena::with_data(root);
        self.tree = tree;
        self.root = Some(root_token);
        self.counter = SearchCounter::ZERO;
        root_token
    }

    /// Generates all children of `token`: one per legal move, or a single pass
    /// child when the side to move has none.
    fn expand(&mut self, token: Token) -> Option<Children> {
        let (board, color, depth) = {
            let data = &self.tree.get(token)?.data;
            (data.board, data.color, data.depth)
        };
        let moves = legal_moves(&board, color);
        let mut children = Children::new();
        if moves.is_empty() {
            let pass = NodeData::child_of(token, depth, board, color.opposite(), None, GameStatus::Ongoing);
            children.push(token.append(&mut self.tree, pass));
        } else {
            for mv in moves {
                let mut next = board;
                apply_move(&mut next, color, mv);
                let status = status(&next, color);
                let child = NodeData::child_of(token, depth, next, color.opposite(), Some(mv), status);
                children.push(token.append(&mut self.tree, child));
            }
        }
        self.counter.states_visited += children.len() as u64;
        Some(children)
    }

    /// Scores every child of `token` and returns the first one with the highest score.
    fn select_level(&mut self, token: Token) -> Option<Token> {
        let parent_node = self.tree.get(token)?;
        let children: Children = parent_node.children_tokens(&self.tree).collect();
        let scores = {
            let ctx = SelectionPolicyContext {
                config: &self.config,
                parent: &parent_node.data,
            };
            children
                .iter()
                .map(|&child| {
                    let child = &self.tree.get(child)?.data;
                    Some(self.selection_policy.score(&ctx, child))
                })
                .collect::<Option<SmallVec<[f64; 16]>>>()?
        };

        let mut best: Option<(Token, f64)> = None;
        for (&child, &score) in children.iter().zip(scores.iter()) {
            if let Some(node) = self.tree.get_mut(child) {
                node.data.score = score;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child, score));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Descends from `root` to the node the next playout starts from.
    ///
    /// Stops at a terminal node, at a freshly expanded node (returning one of its
    /// new children at random), or at the first unvisited child selected.
    fn select(&mut self, root: Token) -> Option<Token> {
        let mut current = root;
        loop {
            let node = self.tree.get(current)?;
            if node.data.status.is_terminal() {
                return Some(current);
            }
            if node.is_leaf() {
                let children = self.expand(current)?;
                return children.choose(&mut self.rng).copied();
            }
            let next = self.select_level(current)?;
            if self.tree.get(next)?.data.stats.visits == 0 {
                return Some(next);
            }
            current = next;
        }
    }

    /// Material at the end of a playout from `token`. Terminal nodes are scored directly.
    fn simulate(&mut self, token: Token) -> Option<i32> {
        let data = &self.tree.get(token)?.data;
        if data.status.is_terminal() {
            return Some(data.board.material());
        }
        let (board, color) = (data.board, data.color);
        let playout = random_playout(&board, color, self.config.random_playout_cutoff, &mut self.rng);
        self.counter.states_visited += playout.plies as u64;
        if playout.cutoff {
            self.counter.cutoff_playouts += 1;
        }
        Some(playout.material)
    }

    fn backpropagate(&mut self, token: Token, result: i32) {
        let mut current = Some(token);
        while let Some(token) = current {
            let Some(node) = self.tree.get_mut(token) else {
                break;
            };
            let data = &mut node.data;
            data.stats.record(data.color, result);
            current = data.parent;
        }
    }

    fn iteration(&mut self, root: Token) -> Option<(u8, i32)> {
        let selected = self.select(root)?;
        let result = self.simulate(selected)?;
        self.backpropagate(selected, result);
        let depth = self.tree.get(selected)?.data.depth;
        self.counter.iterations += 1;
        self.counter.max_depth = self.counter.max_depth.max(depth);
        Some((depth, result))
    }

    /// Root child with the strictly greatest visit count, the first one seen on ties.
    pub fn best_child(&self) -> Option<&NodeData> {
        let root = self.tree.get(self.root?)?;
        let mut best: Option<&NodeData> = None;
        for child in root.children(&self.tree) {
            let visits = child.data.stats.visits;
            if visits > best.map_or(0, |b| b.stats.visits) {
                best = Some(&child.data);
            }
        }
        best
    }

    /// Move and statistics of every root child, in expansion order.
    pub fn root_children(&self) -> Vec<(Option<Move>, Stats)> {
        let Some(root) = self.root.and_then(|root| self.tree.get(root)) else {
            return Vec::new();
        };
        root.children(&self.tree)
            .map(|child| (child.data.mv, child.data.stats))
            .collect()
    }

    /// Follows the most visited child from the root. A pass ends the line.
    pub fn principal_variation(&self) -> Vec<Move> {
        let mut pv = Vec::new();
        let Some(mut node) = self.root.and_then(|root| self.tree.get(root)) else {
            return pv;
        };
        loop {
            let mut best: Option<&atree::Node<NodeData>> = None;
            for child in node.children(&self.tree) {
                if child.data.stats.visits > best.map_or(0, |b| b.data.stats.visits) {
                    best = Some(child);
                }
            }
            let Some(child) = best else {
                break;
            };
            let Some(mv) = child.data.mv else {
                break;
            };
            pv.push(mv);
            node = child;
        }
        pv
    }
}

impl<S: SelectionPolicy, O: SearchObserver> GameTreeSearch for MCTS<S, O> {
    fn search(&mut self, board: &Board, to_move: Side) -> SearchResult {
        let t0 = Instant::now();
        let root = self.init(*board, to_move);
        if !has_legal_move(board, to_move) {
            return SearchResult::new(None, 0.0, self.counter);
        }

        let limits = self
            .config
            .limits
            .unwrap_or(MCTSConfig::DEFAULT_LIMITS)
            .scale_time(self.config.time_budget_fraction);
        loop {
            let Some((depth, result)) = self.iteration(root) else {
                log::warn!("search: iteration failed after {} iterations", self.counter.iterations);
                break;
            };
            let elapsed = t0.elapsed();
            self.observer.on_iteration(&IterationInfo {
                iteration: self.counter.iterations,
                depth,
                result,
                elapsed,
            });
            if limits.should_terminate(elapsed, self.counter.iterations) {
                break;
            }
        }

        let (best_move, eval) = self
            .best_child()
            .map(|child| (child.mv, child.stats.ratio() as f32))
            .unwrap_or((None, 0.0));
        let summary = SearchSummary {
            best_move,
            counter: self.counter,
            elapsed: t0.elapsed(),
            root_children: self.root_children(),
            principal_variation: self.principal_variation(),
        };
        self.observer.on_search_end(&summary);
        if self.config.debug {
            self.log_tree(root, 2, 1);
        }
        SearchResult::new(best_move, eval, self.counter)
    }
}
