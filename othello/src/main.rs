mod display;
mod interactive;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use othello_agents::{
    play_match, search, weight, Agent, MinimaxAgent, RandomAgent, TurnEvent, SEARCH_DEPTH,
};
use othello_core::{parse_square, perft, perft_divide, positions, Color, GameState};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use display::display_board;

#[derive(Parser)]
#[command(name = "othello", version, about = "Othello engine with an alpha-beta player")]
struct Cli {
    /// Log search and match details (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play agents against each other
    Play(PlayArgs),
    /// Play against the engine in the terminal
    Interactive {
        /// Search depth of the engine
        #[arg(long, default_value_t = SEARCH_DEPTH)]
        depth: u8,
        /// Play White instead of Black
        #[arg(long)]
        white: bool,
    },
    /// Search a position and print the chosen move
    Search {
        #[command(flatten)]
        position: PositionArg,
        #[arg(long, default_value_t = SEARCH_DEPTH)]
        depth: u8,
    },
    /// Print the positional weight of a square
    Eval {
        /// Square name, e.g. a1
        square: String,
    },
    /// Count leaf nodes of the move tree
    Perft {
        depth: u8,
        #[command(flatten)]
        position: PositionArg,
        /// Break the count down by root move
        #[arg(long)]
        divide: bool,
    },
    /// Display a position and its legal moves
    Show {
        #[command(flatten)]
        position: PositionArg,
    },
}

#[derive(Args)]
struct PositionArg {
    /// Position in board notation (defaults to the starting position)
    #[arg(long)]
    position: Option<String>,
}

impl PositionArg {
    fn state(&self) -> Result<GameState> {
        let text = self.position.as_deref().unwrap_or(positions::STARTING);
        GameState::from_notation(text).with_context(|| format!("cannot parse position '{text}'"))
    }
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long, value_enum, default_value_t = AgentChoice::Minimax)]
    black: AgentChoice,
    #[arg(long, value_enum, default_value_t = AgentChoice::Random)]
    white: AgentChoice,
    /// Search depth of minimax agents
    #[arg(long, default_value_t = SEARCH_DEPTH)]
    depth: u8,
    /// Seed for random agents; White uses seed + 1
    #[arg(long)]
    seed: Option<u64>,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Print the board after every move
    #[arg(long)]
    boards: bool,
    #[command(flatten)]
    position: PositionArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum AgentChoice {
    Minimax,
    Random,
}

impl AgentChoice {
    fn build(self, depth: u8, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentChoice::Minimax => Box::new(MinimaxAgent::with_depth(depth)),
            AgentChoice::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_play(args: &PlayArgs) -> Result<()> {
    let start = args.position.state()?;
    let mut tally = [0u32; 3]; // black wins, white wins, draws

    for game in 0..args.games {
        let seed = args.seed.map(|s| s.wrapping_add(2 * u64::from(game)));
        let mut black = args.black.build(args.depth, seed);
        let mut white = args.white.build(args.depth, seed.map(|s| s.wrapping_add(1)));

        println!("Game {}: {} (X) vs {} (O)", game + 1, black.name(), white.name());

        let report = play_match(start.clone(), black.as_mut(), white.as_mut(), |event| match event {
            TurnEvent::Moved { color, mv, state } => {
                println!("{color} plays {mv}");
                if args.boards {
                    display_board(state);
                }
            }
            TurnEvent::Passed { color } => println!("{color} passes"),
            TurnEvent::Terminated { color } => println!("{color} ended the match"),
        })?;

        display_board(&report.final_state);
        match report.leader() {
            Some(Color::Black) => {
                tally[0] += 1;
                println!("Black wins {}-{}", report.black_discs, report.white_discs);
            }
            Some(Color::White) => {
                tally[1] += 1;
                println!("White wins {}-{}", report.white_discs, report.black_discs);
            }
            None => {
                tally[2] += 1;
                println!("Draw {}-{}", report.black_discs, report.white_discs);
            }
        }
        if !report.final_state.is_game_over() {
            println!("(match stopped before the board was settled)");
        }
        println!();
    }

    if args.games > 1 {
        println!(
            "Black {} / White {} / Draws {}",
            tally[0], tally[1], tally[2]
        );
    }
    Ok(())
}

fn run_search(state: &GameState, depth: u8) {
    display_board(state);
    println!("Searching to depth {}...", depth);

    let start = Instant::now();
    let result = search(state, depth);
    let elapsed = start.elapsed();

    match result.best_move {
        Some(best_move) => {
            println!("\nBest move: {}", best_move);
            println!("Score: {}", result.score);
            println!("Nodes: {}", result.stats.nodes);
            println!("Cutoffs: {}", result.stats.cutoffs);
            println!("Time: {:.3}s", elapsed.as_secs_f64());
        }
        None => println!("No legal moves available"),
    }
    if result.game_ended() {
        println!("The game is over");
    } else if result.stats.game_endings > 0 {
        println!("Game endings within reach: {}", result.stats.game_endings);
    }
}

fn run_perft(state: &GameState, depth: u8, divide: bool) {
    println!("Running perft({})...", depth);
    println!("Position: {}", state.to_notation());

    if divide {
        let results = perft_divide(state, depth);
        let mut total = 0;

        for (mv, count) in &results {
            println!("{}: {}", mv, count);
            total += count;
        }

        println!("\nTotal: {}", total);
    } else {
        let start = Instant::now();
        let nodes = perft(state, depth);
        let elapsed = start.elapsed();

        println!("Nodes: {}", nodes);
        println!("Time: {:.2}s", elapsed.as_secs_f64());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Play(args) => run_play(&args)?,
        Command::Interactive { depth, white } => {
            let human = if white { Color::White } else { Color::Black };
            interactive::InteractiveGame::new(depth, human)
                .run()
                .context("terminal session failed")?;
        }
        Command::Search { position, depth } => run_search(&position.state()?, depth),
        Command::Eval { square } => {
            let square = parse_square(&square)?;
            println!("{}: {}", square, weight(square));
        }
        Command::Perft {
            depth,
            position,
            divide,
        } => run_perft(&position.state()?, depth, divide),
        Command::Show { position } => {
            let state = position.state()?;
            display_board(&state);
            println!("Position: {}", state.to_notation());
        }
    }

    Ok(())
}
