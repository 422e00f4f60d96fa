//! Console entry point: a two-player hotseat game with the basic set

use clap::Parser;
use hearth_rs::cards::default_deck;
use hearth_rs::game::{
    GameLoop, GameState, InteractiveController, OutputFormat, PlayerController, VerbosityLevel,
};
use hearth_rs::Result;

#[derive(Parser, Debug)]
#[command(name = "hearth", about = "A small card battler on the console", version)]
struct Args {
    /// First player's name (moves first, draws a smaller opening hand)
    #[arg(default_value = "Player 1")]
    player1: String,

    /// Second player's name
    #[arg(default_value = "Player 2")]
    player2: String,

    /// RNG seed for deck shuffling and random effects
    #[arg(long)]
    seed: Option<u64>,

    /// Output verbosity: silent, minimal, normal or verbose
    #[arg(long, default_value = "normal")]
    verbosity: VerbosityLevel,

    /// Emit log lines as JSON objects
    #[arg(long)]
    json: bool,

    /// Stop the game after this many rounds
    #[arg(long, default_value_t = 100)]
    max_rounds: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut game = GameState::new();
    if let Some(seed) = args.seed {
        game.seed_rng(seed);
    } else {
        game.seed_rng(rand::random());
    }
    game.logger.set_verbosity(args.verbosity);
    if args.json {
        game.logger.set_output_format(OutputFormat::Json);
    }

    game.add_player(args.player1, default_deck());
    game.add_player(args.player2, default_deck());

    let mut controllers: Vec<Box<dyn PlayerController>> = vec![
        Box::new(InteractiveController::new()),
        Box::new(InteractiveController::new()),
    ];

    let mut game_loop = GameLoop::new(game).with_max_rounds(args.max_rounds);
    let result = game_loop.run(&mut controllers)?;

    match result.winner {
        Some(id) => {
            let name = &game_loop.game.player(id)?.name;
            println!("Game over after {} rounds: {} wins", result.rounds_played, name);
        }
        None => println!(
            "Game over after {} rounds with no winner",
            result.rounds_played
        ),
    }
    Ok(())
}
