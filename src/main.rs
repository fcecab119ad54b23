//! Command-line front end for the renju engine
//!
//! `renju move` answers one JSON request; `renju selfplay` plays the engine
//! against itself and prints the final position.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};

use renju::rules::{is_legal_move, winning_stones};
use renju::{
    check_draw, check_win, handle_request, AIEngine, AiPlayer, Board, Difficulty, EngineRequest,
    Move, RandomAI, SearchConfig, SearchType, Stone,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Gomoku/renju move engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read an engine request as JSON and print the response
    Move {
        /// Request file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Play a full game between two engines
    Selfplay {
        #[arg(long, default_value = "medium")]
        black: Difficulty,
        #[arg(long, default_value = "medium")]
        white: Difficulty,
        /// White picks random candidates instead of searching
        #[arg(long)]
        random_white: bool,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Disable renju restrictions on Black
        #[arg(long)]
        no_forbidden: bool,
        /// Print every move as it is played
        #[arg(long)]
        verbose: bool,
    },
}

fn read_request(input: Option<PathBuf>) -> Result<EngineRequest> {
    let text = match input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    Ok(EngineRequest::from_json(&text)?)
}

fn run_move(input: Option<PathBuf>) -> Result<()> {
    let request = read_request(input)?;
    let response = handle_request(&mut AIEngine::new(), &request)?;
    println!("{}", response.to_json()?);
    Ok(())
}

struct Seat {
    player: Box<dyn AiPlayer>,
    config: SearchConfig,
}

fn run_selfplay(
    black: Difficulty,
    white: Difficulty,
    random_white: bool,
    seed: u64,
    forbidden_rules: bool,
    verbose: bool,
) -> Result<()> {
    let mut seats = [
        Seat {
            player: Box::new(AIEngine::new()),
            config: SearchConfig::new(black, forbidden_rules),
        },
        Seat {
            player: if random_white {
                Box::new(RandomAI::with_seed(seed))
            } else {
                Box::new(AIEngine::new())
            },
            config: SearchConfig::new(white, forbidden_rules),
        },
    ];

    let mut board = Board::new();
    let mut history: Vec<Move> = Vec::new();
    let mut color = Stone::Black;
    let mut total_ms = 0u64;

    loop {
        let seat = &mut seats[usize::from(color == Stone::White)];
        let result = seat.player.best_move(&board, color, &seat.config);
        total_ms += result.time_ms;

        if result.search_type == SearchType::Fallback {
            println!("{board}");
            println!("{} has no legal move after {} moves", color, history.len());
            break;
        }

        // The engine's answer is re-validated before it is committed
        if !is_legal_move(&board, result.best_move, color, forbidden_rules) {
            error!("{} returned illegal move {}", color, result.best_move);
            bail!("engine produced an illegal move {} for {}", result.best_move, color);
        }
        board.apply_move(result.best_move, color)?;

        let number = u32::try_from(history.len() + 1)?;
        let mv = Move::new(result.best_move, color, number).with_score(result.score);
        if verbose {
            println!(
                "{:>3}. {} {} score {} ({:?}, {} nodes, {}ms)",
                mv.number,
                color,
                mv.pos,
                result.score,
                result.search_type,
                result.nodes,
                result.time_ms
            );
        }
        history.push(mv);

        if check_win(&board, result.best_move, forbidden_rules) {
            println!("{board}");
            let line: Vec<String> = winning_stones(&board, result.best_move)
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("{} wins after {} moves: {}", color, history.len(), line.join(" "));
            break;
        }
        if check_draw(&board) {
            println!("{board}");
            println!("draw after {} moves", history.len());
            break;
        }
        color = color.opponent();
    }

    info!("self-play finished in {}ms of engine time", total_ms);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Move { input } => run_move(input),
        Command::Selfplay {
            black,
            white,
            random_white,
            seed,
            no_forbidden,
            verbose,
        } => run_selfplay(black, white, random_white, seed, !no_forbidden, verbose),
    }
}
