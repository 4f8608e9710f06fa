//! Terminal front end for Bantumi.
//!
//! Plays one game at a time on stdin/stdout, either hot-seat or against the
//! greedy heuristic, replaying each move on the configured cadence.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use bantumi::{
    AppConfig, BoardState, ControllerError, Game, GameResult, Opponent, PlaybackConfig, PlaybackStatus,
    Player, PITS_PER_PLAYER,
};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Bantumi - the Mancala game from the old phones
#[derive(Parser, Debug)]
#[command(name = "bantumi")]
#[command(about = "Play Bantumi in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Who plays Player Two (overrides the config file)
    #[arg(short, long, value_enum)]
    opponent: Option<OpponentArg>,

    /// Path to a TOML config file
    #[arg(short, long, default_value = "bantumi.toml")]
    config: PathBuf,

    /// Skip step playback delays
    #[arg(long)]
    no_animation: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OpponentArg {
    Human,
    Computer,
}

impl From<OpponentArg> for Opponent {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Human => Opponent::Human,
            OpponentArg::Computer => Opponent::Computer,
        }
    }
}

enum Input {
    Pit(usize),
    Help,
    Quit,
    Unknown,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(opponent) = cli.opponent {
        config.opponent = opponent.into();
    }
    if cli.no_animation {
        config.playback = PlaybackConfig::instant();
    }

    info!(opponent = ?config.opponent, "starting game");
    play(&config)
}

fn play(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new(config.opponent);

    print_instructions();

    while !game.is_over() {
        render(&game, config.opponent);

        if game.is_computer_turn() {
            thread::sleep(config.playback.computer_delay());
            let pit = game.play_computer_turn()?;
            println!("Computer plays pit {}", pit_label(pit));
        } else {
            prompt(game.state().current_player, config.opponent)?;
            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };

            match parse_input(&line?, game.state().current_player) {
                Input::Pit(pit) => match game.select_pit(pit) {
                    Ok(()) => {}
                    Err(ControllerError::Rule(e)) => {
                        println!("Can't play that: {e}");
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                },
                Input::Help => {
                    print_instructions();
                    continue;
                }
                Input::Quit => {
                    println!("Bye!");
                    return Ok(());
                }
                Input::Unknown => {
                    println!("Enter a pit number 1-{PITS_PER_PLAYER}, ? for help, q to quit");
                    continue;
                }
            }
        }

        play_back(&mut game, &config.playback, config.opponent);
    }

    render(&game, config.opponent);
    print_result(&game, config.opponent);
    Ok(())
}

/// Replay the in-flight move, redrawing the board after every step.
fn play_back(game: &mut Game, playback: &PlaybackConfig, opponent: Opponent) {
    let animate = !playback.step_interval().is_zero();
    while let Some(status) = game.tick() {
        match status {
            PlaybackStatus::Playing { .. } => {
                if animate {
                    render(game, opponent);
                    thread::sleep(playback.step_interval());
                }
            }
            PlaybackStatus::Paused => thread::sleep(playback.step_interval()),
            PlaybackStatus::Finished { game_over } => {
                if game_over {
                    thread::sleep(playback.game_over_delay());
                }
            }
        }
    }
}

/// Pits are numbered 1-6 from each player's left.
fn parse_input(line: &str, player: Player) -> Input {
    match line.trim() {
        "q" | "quit" => Input::Quit,
        "?" | "h" | "help" => Input::Help,
        text => match text.parse::<usize>() {
            Ok(n) if (1..=PITS_PER_PLAYER).contains(&n) => {
                Input::Pit(*player.pits().start() + n - 1)
            }
            _ => Input::Unknown,
        },
    }
}

fn pit_label(pit: usize) -> usize {
    match Player::owner_of(pit) {
        Some(player) => pit - *player.pits().start() + 1,
        None => pit,
    }
}

fn side_name(player: Player, opponent: Opponent) -> &'static str {
    match (player, opponent) {
        (Player::One, Opponent::Computer) => "YOU",
        (Player::Two, Opponent::Computer) => "COMPUTER",
        (Player::One, Opponent::Human) => "P1",
        (Player::Two, Opponent::Human) => "P2",
    }
}

/// One slot, bracketed when the playback cursor sits on it.
fn cell(board: &BoardState, slot: usize, highlight: Option<usize>) -> String {
    let seeds = board.seeds(slot);
    if highlight == Some(slot) {
        format!("[{seeds:>2}]")
    } else {
        format!(" {seeds:>2} ")
    }
}

/// Player Two's row on top (right to left), stores on the sides, Player One
/// below.
fn draw_board(board: &BoardState, highlight: Option<usize>) -> String {
    let row = |player: Player, reversed: bool| {
        let mut pits: Vec<usize> = player.pits().collect();
        if reversed {
            pits.reverse();
        }
        pits.into_iter()
            .map(|pit| cell(board, pit, highlight))
            .collect::<String>()
    };

    format!(
        "    {}\n{}{}{}\n    {}",
        row(Player::Two, true),
        cell(board, Player::Two.store(), highlight),
        " ".repeat(4 * PITS_PER_PLAYER),
        cell(board, Player::One.store(), highlight),
        row(Player::One, false),
    )
}

fn render(game: &Game, opponent: Opponent) {
    let board = game.displayed_board();
    println!();
    println!("{}", draw_board(board, game.highlighted_pit()));
    println!(
        "{}: {}   {}: {}",
        side_name(Player::One, opponent),
        board.store(Player::One),
        side_name(Player::Two, opponent),
        board.store(Player::Two)
    );
}

fn prompt(player: Player, opponent: Opponent) -> io::Result<()> {
    print!("{} > ", side_name(player, opponent));
    io::stdout().flush()
}

fn print_result(game: &Game, opponent: Opponent) {
    println!("GAME OVER");
    let headline = match (game.result(), opponent) {
        (Some(GameResult::Winner(Player::One)), _) => "YOU WIN!",
        (Some(GameResult::Winner(Player::Two)), Opponent::Computer) => "COMPUTER WINS!",
        (Some(GameResult::Winner(Player::Two)), Opponent::Human) => "PLAYER 2 WINS!",
        (Some(GameResult::Draw), _) | (None, _) => "IT'S A TIE!",
    };
    println!("{headline}");
}

fn print_instructions() {
    println!("BANTUMI");
    println!("Pick one of your pits (1-{PITS_PER_PLAYER}, left to right on your side).");
    println!("Seeds are sown one per pit, including your store, skipping the opponent's.");
    println!("Last seed in your store: play again.");
    println!("Last seed in an empty pit of yours: capture it and the seeds opposite.");
    println!("When a side runs out, the rest go to their owner's store. Most seeds wins.");
}
