use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use highcard_engine::engine::{Game, GameConfig};
use highcard_engine::infra::{ConsolePrompt, ConsoleSink, MessageCatalog, SystemRng};

#[derive(Parser)]
#[command(name = "highcard")]
#[command(about = "Play a round-based card drawing game in the terminal")]
struct Args {
    /// Names of the players who wish to play.
    #[arg(required = true)]
    names: Vec<String>,

    /// Maximum number of rounds per game.
    #[arg(long, default_value_t = 3)]
    rounds: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let code = match run(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };
    // Прощание печатается на любом пути выхода, включая ошибки.
    println!();
    println!("Goodbye.");
    std::process::exit(code);
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let catalog = MessageCatalog::builtin()?;
    let mut game = Game::new(
        args.names.clone(),
        GameConfig {
            max_rounds: args.rounds,
        },
        SystemRng::default(),
    )?;

    let mut sink = ConsoleSink::new(catalog, SystemRng::default());
    let mut gate = ConsolePrompt::new("Hit enter to draw a card.");

    loop {
        game.play(&mut sink, &mut gate)?;
        if !ask_play_again()? {
            return Ok(());
        }
        game.new_game();
    }
}

/// Спросить, играем ли ещё раз. Принимаются y/n/yes/no без учёта
/// регистра, всё прочее переспрашивается. Конец ввода — отказ.
fn ask_play_again() -> Result<bool, io::Error> {
    loop {
        print!("Play again? (Y/N)");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Not a valid response."),
        }
    }
}
