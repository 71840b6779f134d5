use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};
use structopt::StructOpt;

use reversi_sim::{prelude::*, thiserror};
use reversi_sim_search::mcts::{policy::UCT, LogObserver, MCTSConfig, MCTS};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchAlgorithm {
    MCTS,
    Random,
}

impl FromStr for SearchAlgorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mcts" => Ok(Self::MCTS),
            "random" => Ok(Self::Random),
            _ => Err("expected mcts|random"),
        }
    }
}

impl Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MCTS => f.write_str("mcts"),
            Self::Random => f.write_str("random"),
        }
    }
}

pub fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => Err(format!("unknown side: {s}")),
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct SearchConfig {
    #[structopt(
        short = "A",
        long = "--algorithm",
        help = "mcts|random, Monte-Carlo Tree Search or uniformly random legal moves"
    )]
    pub algorithm: Option<SearchAlgorithm>,

    #[structopt(
        short = "C",
        long = "--mcts-c",
        help = "MCTS: exploration constant. Higher value promotes wider search, while lower value promotes deeper search."
    )]
    pub mcts_c: Option<f64>,

    #[structopt(long = "--mcts-max-steps", help = "MCTS: max plies per playout, passes included")]
    pub mcts_random_playout_max_steps: Option<u32>,

    #[structopt(
        short = "T",
        long = "--time-limit-ms",
        help = "Set time limit per move in milliseconds"
    )]
    pub time_limit_ms: Option<u64>,

    #[structopt(short = "I", long = "--max-iterations", help = "Max search iterations per move")]
    pub max_iterations: Option<u64>,

    #[structopt(short = "D", long = "--debug", help = "Log the search tree after each search")]
    pub debug: bool,
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct SearchOpts {
    #[structopt(short = "S", long = "--seed", help = "Random seed for the searches")]
    pub seed: Option<u64>,

    #[structopt(
        parse(from_os_str),
        long = "--position",
        help = "Path to a board file: 8 rows of W, B and - cells, optionally with the row/column labels printed by the benchmark"
    )]
    pub position: Option<PathBuf>,

    #[structopt(
        long = "--to-move",
        parse(try_from_str = parse_side),
        help = "Side to move in the starting position: white|black (default: black)"
    )]
    pub to_move: Option<Side>,

    #[structopt(flatten)]
    pub search: SearchConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("cannot read position file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid position: {0}")]
    Board(#[from] InvalidBoardError),
}

pub enum GenericSearch {
    MCTS(MCTS<UCT, LogObserver>),
    Random(RandomSearch),
}

impl GameTreeSearch for GenericSearch {
    fn search(&mut self, board: &Board, to_move: Side) -> SearchResult {
        match self {
            Self::MCTS(s) => s.search(board, to_move),
            Self::Random(s) => s.search(board, to_move),
        }
    }
}

impl SearchConfig {
    pub fn make_search(&self, seed: u64, limits: Option<SearchLimits>) -> GenericSearch {
        match self.algorithm.unwrap_or(SearchAlgorithm::MCTS) {
            SearchAlgorithm::MCTS => GenericSearch::MCTS(MCTS::new_with_observer(
                self.get_mcts_config(limits),
                seed,
                LogObserver,
            )),
            SearchAlgorithm::Random => GenericSearch::Random(RandomSearch::new(seed)),
        }
    }

    pub fn get_mcts_config(&self, limits: Option<SearchLimits>) -> MCTSConfig {
        MCTSConfig {
            exploration: self.mcts_c.unwrap_or(MCTSConfig::STANDARD.exploration),
            random_playout_cutoff: self
                .mcts_random_playout_max_steps
                .unwrap_or(MCTSConfig::STANDARD.random_playout_cutoff),
            debug: self.debug,
            limits,
            ..MCTSConfig::STANDARD
        }
    }

    pub fn get_limits(&self) -> Option<SearchLimits> {
        if self.time_limit_ms.is_none() && self.max_iterations.is_none() {
            return None;
        }
        Some(SearchLimits {
            max_time: self.time_limit_ms.map(Duration::from_millis),
            max_iterations: self.max_iterations,
        })
    }
}

impl SearchOpts {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(100)
    }

    pub fn make_search(&self, seed: u64) -> GenericSearch {
        self.search.make_search(seed, self.get_limits())
    }

    pub fn get_limits(&self) -> Option<SearchLimits> {
        self.search.get_limits()
    }

    /// Starting position and side to move. Defaults to the standard position with Black to move.
    pub fn get_position(&self) -> Result<(Board, Side), PositionError> {
        let board = match &self.position {
            None => Board::standard(),
            Some(path) => std::fs::read_to_string(path)?.parse()?,
        };
        Ok((board, self.to_move.unwrap_or(Side::FIRST)))
    }
}
