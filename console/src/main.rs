mod config;
mod game;
mod input;
mod render;

use std::io;
use clap::Parser;
use common::games::SessionRng;
use common::log;
use common::logger::{self, LogSink};
use config::{ConsoleConfig, DEFAULT_CONFIG_PATH, load_config, save_config};
use game::ConsoleGame;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax AI")]
struct Args {
    /// 1 = Easy, 2 = Medium, 3 = Hard. Asked for on start when omitted.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    difficulty: Option<u8>,

    /// Seed for the AI's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Keep previous output instead of clearing the screen before each board.
    #[arg(long)]
    no_clear: bool,

    /// Log to stderr when no log file is configured.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

impl Args {
    fn apply_to(&self, mut config: ConsoleConfig) -> ConsoleConfig {
        if self.difficulty.is_some() {
            config.difficulty = self.difficulty;
        }
        if self.no_clear {
            config.clear_screen = false;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file.clone();
        }
        config
    }

    fn log_sink(&self, config: &ConsoleConfig) -> Result<Option<LogSink>, String> {
        match config.log_file {
            Some(ref path) => LogSink::append_to(path).map(Some),
            None if self.verbose => Ok(Some(LogSink::Stderr)),
            None => Ok(None),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.apply_to(load_config(&args.config)?);

    if args.write_config {
        save_config(&args.config, &config)?;
        println!("Config written to {}", args.config);
        return Ok(());
    }

    if let Some(sink) = args.log_sink(&config)? {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix, sink);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let difficulty = config.difficulty()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = ConsoleGame::new(stdin.lock(), stdout.lock(), rng, config.clear_screen);
    let status = game.run(difficulty)?;
    log!("Finished with {:?}", status);

    Ok(())
}
