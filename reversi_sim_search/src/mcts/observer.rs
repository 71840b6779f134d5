use std::time::Duration;

use itertools::Itertools;

use reversi_sim::prelude::*;

use super::Stats;

/// Progress of one completed search iteration.
#[derive(Debug, Copy, Clone)]
pub struct IterationInfo {
    pub iteration: u64,
    /// Depth of the node the playout started from.
    pub depth: u8,
    /// Material of the final playout board.
    pub result: i32,
    pub elapsed: Duration,
}

/// Outcome of a finished search.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub best_move: Option<Move>,
    pub counter: SearchCounter,
    pub elapsed: Duration,
    /// Move and statistics of every root child, in expansion order.
    pub root_children: Vec<(Option<Move>, Stats)>,
    pub principal_variation: Vec<Move>,
}

/// Receives search progress. All methods default to doing nothing.
pub trait SearchObserver {
    fn on_iteration(&mut self, _info: &IterationInfo) {}

    fn on_search_end(&mut self, _summary: &SearchSummary) {}
}

#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards progress to the `log` facade.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_iteration(&mut self, info: &IterationInfo) {
        log::trace!(
            "iteration={} depth={} result={} elapsed={:?}",
            info.iteration,
            info.depth,
            info.result,
            info.elapsed
        );
    }

    fn on_search_end(&mut self, summary: &SearchSummary) {
        log::debug!(
            "search done: best={} pv=[{}] {}",
            summary
                .best_move
                .map(|mv| mv.to_string())
                .unwrap_or_else(|| "pass".to_string()),
            summary.principal_variation.iter().map(|mv| mv.square_name()).join(" "),
            summary.counter.summary(summary.elapsed.as_nanos())
        );
        for (mv, stats) in &summary.root_children {
            let mv = mv.map(|mv| mv.to_string()).unwrap_or_else(|| "pass".to_string());
            log::debug!("  {mv}: {stats} ratio={:.3}", stats.ratio());
        }
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_iteration(&mut self, info: &IterationInfo) {
        (**self).on_iteration(info)
    }

    fn on_search_end(&mut self, summary: &SearchSummary) {
        (**self).on_search_end(summary)
    }
}
