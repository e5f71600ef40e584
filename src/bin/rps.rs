//! Console front end: play rock-paper-scissors against an adaptive opponent.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use rust_rps::{Move, Outcome, Round, Session, SessionConfig, StrategyKind, DEFAULT_WINDOW};

#[derive(Debug, Parser)]
#[command(name = "rps", about = "Play rock-paper-scissors against an adaptive opponent")]
struct Args {
    /// Opponent strategy: reactive, pattern, or uniform
    #[arg(short, long, default_value_t = StrategyKind::Pattern)]
    strategy: StrategyKind,

    /// Recent human moves inspected by the pattern strategy
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    window: usize,

    /// Fixed seed to replay a game
    #[arg(long)]
    seed: Option<u64>,

    /// Log strategy decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = SessionConfig::default()
        .with_strategy(args.strategy)
        .with_window(args.window);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::new(config)?;

    println!(
        "{}",
        format!("=== Rock, Paper, Scissors ({} opponent) ===", session.strategy_name()).bold()
    );

    loop {
        let human = prompt_move()?;
        let round = session.play_round(human)?;
        println!("The computer chose {}.", round.opponent());
        println!("{}", narrate(&round));
        println!("Score: {}", session.score());

        let again = Confirm::new()
            .with_prompt("Play another round?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    println!(
        "\nThanks for playing! Final score: {} (seed {})",
        session.score(),
        session.seed()
    );
    Ok(())
}

fn prompt_move() -> Result<Move> {
    let options = Move::ALL
        .iter()
        .map(|m| format!("{}[{}]", m, m.index()))
        .collect::<Vec<_>>()
        .join(", ");
    let input: String = Input::new()
        .with_prompt(format!("\nChoose a move ({})", options))
        .validate_with(|i: &String| -> Result<(), String> {
            i.parse::<Move>().map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(input.parse::<Move>()?)
}

fn narrate(round: &Round) -> String {
    let human = round.human();
    let opponent = round.opponent();
    match round.outcome() {
        Outcome::Draw => format!("You both chose {}. {}", human, "Draw!".yellow().bold()),
        Outcome::Win => format!(
            "{} {} {}. {}",
            human,
            human.verb(),
            opponent,
            "You win!".green().bold()
        ),
        Outcome::Loss => format!(
            "{} {} {}. {}",
            opponent,
            opponent.verb(),
            human,
            "You lose!".red().bold()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrate_names_winner_first() {
        colored::control::set_override(false);

        let win = narrate(&Round::new(Move::Paper, Move::Rock));
        assert_eq!(win, "Paper covers Rock. You win!");

        let loss = narrate(&Round::new(Move::Paper, Move::Scissors));
        assert_eq!(loss, "Scissors cut Paper. You lose!");

        let draw = narrate(&Round::new(Move::Rock, Move::Rock));
        assert_eq!(draw, "You both chose Rock. Draw!");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["rps", "--strategy", "reactive", "--seed", "9"]);
        assert_eq!(args.strategy, StrategyKind::Reactive);
        assert_eq!(args.window, DEFAULT_WINDOW);
        assert_eq!(args.seed, Some(9));
        assert!(!args.verbose);

        assert!(Args::try_parse_from(["rps", "--strategy", "psychic"]).is_err());
    }
}
