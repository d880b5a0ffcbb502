use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use nacbrac::{deal, pretty_format_solution, DfsSolver, Gameboard, SearchLimits, Solver};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Nacbrac patience solver")]
struct Args {
    /// Board string, canonical form: "_|8H,0C,0S,0S|..." (wildcard then nine
    /// slots, cards bottom to top). A bare run of 36 card tokens also works.
    #[arg(long)]
    board: Option<String>,

    /// Read the board string from a file instead of --board
    #[arg(long)]
    input: Option<PathBuf>,

    /// Deal a seeded random board instead of reading one
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum search depth before a branch is abandoned
    #[arg(long, default_value_t = 55)]
    max_depth: u8,

    /// Emit the solution as JSON for downstream consumers
    #[arg(long)]
    json: bool,

    /// Suppress the progress spinner
    #[arg(long)]
    quiet: bool,
}

fn read_board(args: &Args) -> Result<Gameboard, Box<dyn std::error::Error>> {
    if let Some(seed) = args.seed {
        return Ok(deal(seed));
    }
    let text = if let Some(board) = &args.board {
        board.clone()
    } else if let Some(path) = &args.input {
        fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };
    Ok(text.parse::<Gameboard>()?)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut board = match read_board(&args) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("[solve] {e}");
            return ExitCode::from(1);
        }
    };
    let already_solved = board.solved();
    if !args.json {
        println!("[solve] board: {board}");
    }

    let mut solver = DfsSolver::new(SearchLimits {
        max_depth: args.max_depth,
    });
    let pb = if args.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] nodes ~{pos} {msg}").unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(250));
        Some(pb)
    };
    if let Some(pb) = &pb {
        solver = solver.with_progress(pb.clone());
    }

    let solution = match solver.solve(&mut board) {
        Ok(solution) => solution,
        Err(e) => {
            if let Some(pb) = &pb {
                pb.finish_and_clear();
            }
            eprintln!("[solve] {e}");
            return ExitCode::from(1);
        }
    };
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let found = !solution.moves.is_empty();
    if args.json {
        let out = serde_json::json!({
            "solved": already_solved || found,
            "moves": solution.moves,
            "nodes": solution.stats.nodes,
            "dedup_hits": solution.stats.dedup_hits,
            "elapsed_ms": solution.stats.elapsed.as_millis() as u64,
        });
        println!("{out}");
    } else if already_solved {
        println!("[solve] board is already solved, nothing to do.");
    } else if found {
        println!(
            "[solve] solved in {} moves: {}",
            solution.moves.len(),
            pretty_format_solution(&solution.moves)
        );
        println!(
            "[solve] searched {} states ({} deduplicated) in {:.2?}",
            solution.stats.nodes, solution.stats.dedup_hits, solution.stats.elapsed
        );
    } else {
        println!(
            "[solve] no solution within depth bound {}.",
            args.max_depth
        );
    }

    if already_solved || found {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
