mod broadcaster;
mod input;

use std::path::PathBuf;

use broadcaster::ConsoleBroadcaster;
use clap::{Parser, ValueEnum};
use input::{HELP, Input};
use tictactoe_engine::config::ConfigManager;
use tictactoe_engine::{GameConfig, GameMode, SessionCommand, SessionSettings, TicTacToeSession, log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Bot,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Bot => GameMode::VsBot,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long, default_value = "tictactoe.yaml")]
    config: PathBuf,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Save the effective configuration back to the config file.
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if args.write_config {
        config_manager.set_config(&config)?;
    }

    let prefix = args.use_log_prefix.then(|| "Console".to_string());
    logger::init_logger(prefix, config.log_level);
    log!("Loaded config from {}: {:?}", args.config.display(), config);

    let settings = SessionSettings::from(&config);
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let broadcaster = ConsoleBroadcaster::new();
    let session_task = tokio::spawn(TicTacToeSession::run(
        settings.create_session(),
        settings,
        command_rx,
        broadcaster.clone(),
    ));

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match input::parse_line(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => {
                println!("{}", HELP);
                continue;
            }
            Ok(Input::Place(index)) => SessionCommand::PlaceMark {
                index,
                player: broadcaster.current_turn(),
            },
            Ok(Input::Command(command)) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };
        command_tx.send(command)?;
    }

    drop(command_tx);
    let session = session_task.await?;
    let scores = session.scores();
    println!(
        "Final score  X: {}  O: {}  Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
    log!("Console session finished after {} games", scores.games_played());

    Ok(())
}
