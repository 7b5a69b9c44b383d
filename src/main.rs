use std::env;
use std::process::ExitCode;

use chess_rules_engine::board::{Color, SearchConfig, Strategy, DEFAULT_DEPTH};
use chess_rules_engine::EngineController;
use log::info;

const DEFAULT_MAX_PLIES: usize = 200;

struct Options {
    white: Strategy,
    black: Strategy,
    depth: u32,
    seed: Option<u64>,
    max_plies: usize,
}

fn usage() -> String {
    let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
    format!(
        "usage: chess-selfplay [white] [black] [--depth N] [--seed N] [--max-plies N]\n\
         strategies: {} (or ids 0-5)",
        names.join(", ")
    )
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        white: Strategy::NegamaxAlphaBeta,
        black: Strategy::Greedy,
        depth: DEFAULT_DEPTH,
        seed: None,
        max_plies: DEFAULT_MAX_PLIES,
    };
    let mut positional = 0;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| format!("{flag} needs a value"))
                .cloned()
        };
        match arg.as_str() {
            "-h" | "--help" => return Err(usage()),
            "--depth" => {
                options.depth = value("--depth")?
                    .parse()
                    .map_err(|e| format!("bad --depth: {e}"))?;
            }
            "--seed" => {
                options.seed = Some(
                    value("--seed")?
                        .parse()
                        .map_err(|e| format!("bad --seed: {e}"))?,
                );
            }
            "--max-plies" => {
                options.max_plies = value("--max-plies")?
                    .parse()
                    .map_err(|e| format!("bad --max-plies: {e}"))?;
            }
            name => {
                let strategy: Strategy = name.parse().map_err(|e| format!("{e}\n{}", usage()))?;
                match positional {
                    0 => options.white = strategy,
                    1 => options.black = strategy,
                    _ => return Err(usage()),
                }
                positional += 1;
            }
        }
    }
    Ok(options)
}

fn describe(strategy: Strategy, depth: u32) -> String {
    if strategy.uses_depth() {
        format!("{strategy} (depth {depth})")
    } else {
        strategy.to_string()
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut base = SearchConfig::default().with_depth(options.depth);
    if let Some(seed) = options.seed {
        base = base.with_seed(seed);
    }
    let mut controller = EngineController::with_config(base);
    info!(
        "self-play: white {} vs black {}",
        describe(options.white, options.depth),
        describe(options.black, options.depth)
    );

    while !controller.is_game_over() && controller.state().move_log().len() < options.max_plies {
        let strategy = match controller.state().side_to_move() {
            Color::White => options.white,
            Color::Black => options.black,
        };
        controller.set_config(SearchConfig {
            strategy,
            depth: options.depth,
            seed: None,
        });
        if let Err(err) = controller.play_best_move() {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let state = controller.state();
    for (number, pair) in state.move_log().chunks(2).enumerate() {
        let line: Vec<String> = pair.iter().map(|m| m.chess_notation()).collect();
        println!("{}. {}", number + 1, line.join(" "));
    }

    let outcome = if state.is_checkmate() {
        format!("checkmate, {} wins", state.side_to_move().opponent())
    } else if state.is_stalemate() {
        "stalemate".to_string()
    } else {
        format!("stopped after {} plies", state.move_log().len())
    };
    println!("result: {outcome}");
    println!("final position: {}", state.to_fen());

    let counters = controller.node_counters();
    for strategy in Strategy::ALL {
        let nodes = counters.get(strategy);
        if nodes > 0 {
            println!("nodes ({strategy}): {nodes}");
        }
    }
    ExitCode::SUCCESS
}
