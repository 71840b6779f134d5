use std::error::Error;

use instant::Instant;
use structopt::StructOpt;

use reversi_sim::prelude::*;
use reversi_sim_cli_utils::cli_args::{SearchAlgorithm, SearchConfig, SearchOpts};
use reversi_sim_search::mcts::{LogObserver, MCTSConfig, MCTS};

mod match_round;
use match_round::*;

mod perft;
use perft::*;

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Reversed Reversi engine")]
pub enum BenchmarkOpts {
    #[structopt(help = "Play one game between two copies of the search, printing every move.")]
    Benchmark {
        #[structopt(long = "--max-plies")]
        max_plies: Option<u32>,
        #[structopt(flatten)]
        search: SearchOpts,
    },
    #[structopt(help = "Search one position and print the chosen move and the root of the search tree.")]
    Evaluate {
        #[structopt(long = "--tree-depth", help = "Depth of the printed search tree")]
        tree_depth: Option<u8>,
        #[structopt(long = "--json", help = "Print the search tree as JSON")]
        json: bool,
        #[structopt(flatten)]
        search: SearchOpts,
    },
    #[structopt(help = "Measure win rate against a standard opponent.")]
    Match {
        #[structopt(long = "--parallel", short = "-P", help = "Play rounds on multiple threads")]
        parallel: bool,

        #[structopt(long)]
        max_plies: Option<u32>,

        #[structopt(long)]
        rounds: Option<u32>,

        #[structopt(flatten)]
        search: SearchOpts,

        #[structopt(long)]
        standard_algorithm: Option<SearchAlgorithm>,

        #[structopt(long)]
        standard_time_limit_ms: Option<u64>,
    },
    #[structopt(help = "Count move-tree leaves to a fixed depth.")]
    Perft {
        #[structopt(long = "--parallel", short = "-P")]
        parallel: bool,
        #[structopt(long = "--depth", short = "-d")]
        depth: u8,
        #[structopt(flatten)]
        search: SearchOpts,
    },
}

fn standard_search_opts(algorithm: Option<SearchAlgorithm>, standard_time_limit_ms: Option<u64>) -> SearchConfig {
    SearchConfig {
        algorithm,
        mcts_c: Some(MCTSConfig::STANDARD.exploration),
        mcts_random_playout_max_steps: Some(MCTSConfig::STANDARD.random_playout_cutoff),
        time_limit_ms: standard_time_limit_ms.or(Some(100)),
        ..Default::default()
    }
}

fn trace_game(opts: &SearchOpts, max_plies: u32) -> Result<(), Box<dyn Error>> {
    let (board, to_move) = opts.get_position()?;
    let seed = opts.seed();
    let mut searches = ByPlayer::new(opts.make_search(seed), opts.make_search(seed.wrapping_add(1)));
    let (outcome, dt, c) = match_round(board, to_move, &mut searches, max_plies, true);
    println!();
    println!("{}", outcome.board);
    println!(
        "{} after {} plies, white={} black={}",
        outcome.status,
        outcome.plies,
        outcome.board.count(Side::White),
        outcome.board.count(Side::Black)
    );
    println!("{c:?} {}", c.summary(dt.as_nanos()));
    Ok(())
}

fn evaluate(opts: &SearchOpts, tree_depth: u8, json: bool) -> Result<(), Box<dyn Error>> {
    let (board, to_move) = opts.get_position()?;
    let config = opts.search.get_mcts_config(opts.get_limits());
    let mut mcts = MCTS::new_with_observer(config, opts.seed(), LogObserver);
    let t0 = Instant::now();
    let result = mcts.search(&board, to_move);
    let dt = t0.elapsed();

    println!("{board}");
    match result.best_move {
        Some(mv) => println!("{to_move} plays {mv} ({}), eval={:.4}", mv.square_name(), result.eval),
        None => println!("{to_move} has no legal move and passes"),
    }
    println!("{:?} {}", result.counter, result.counter.summary(dt.as_nanos()));
    if let Some(root) = mcts.root {
        let dump = mcts.dump_tree(root, tree_depth);
        if json {
            println!("{}", serde_json::to_string_pretty(&dump)?);
        } else {
            print_dump(&dump, 0);
        }
    }
    Ok(())
}

fn print_dump(dump: &reversi_sim_search::mcts::TreeDump<String>, depth: usize) {
    println!("{}- {}", "  ".repeat(depth), dump.value);
    for child in &dump.children {
        print_dump(child, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opts = BenchmarkOpts::from_args();
    log::debug!("{opts:?}");

    match opts {
        BenchmarkOpts::Benchmark { max_plies, search } => trace_game(&search, max_plies.unwrap_or(200))?,
        BenchmarkOpts::Evaluate {
            tree_depth,
            json,
            search,
        } => evaluate(&search, tree_depth.unwrap_or(2), json)?,
        BenchmarkOpts::Match {
            parallel,
            max_plies,
            rounds,
            search,
            standard_algorithm,
            standard_time_limit_ms,
        } => {
            let t0 = Instant::now();
            let initial = search.get_position()?;
            let standard = standard_search_opts(standard_algorithm, standard_time_limit_ms);
            let seed = search.seed();
            let make_searches = |i: u32| {
                let round_seed = seed.wrapping_mul(2).wrapping_add(2 * i as u64);
                (
                    search.make_search(round_seed),
                    standard.make_search(round_seed.wrapping_add(1), standard.get_limits()),
                )
            };
            let match_opts = IterateMatchOpts {
                rounds: rounds.unwrap_or(100),
                max_plies: max_plies.unwrap_or(200),
                parallel,
                initial,
            };
            let (score, share, total_counter) = iterate_match(&make_searches, match_opts);
            let dt = t0.elapsed();
            println!("{:?} {}", total_counter, total_counter.summary(dt.as_nanos()));
            println!("score={score} ({share:.4}), {}ms", dt.as_millis());
        }
        BenchmarkOpts::Perft {
            parallel,
            depth,
            search,
        } => run_perft(&search, parallel, depth)?,
    };

    Ok(())
}
