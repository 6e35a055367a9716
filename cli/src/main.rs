use std::path::PathBuf;

use clap::Parser;
use connect_four_engine::config::{FileSettingsSource, SettingsStore, Validate};
use connect_four_engine::input::parse_column_list;
use connect_four_engine::{Game, GameSettings, GameState, debug_log, log, logger};

#[derive(Parser)]
#[command(name = "connect_four", about = "Plays a list of Connect-Four moves and reports the result")]
struct Args {
    /// YAML settings file; defaults are used when it does not exist
    #[arg(long, default_value = "connect_four.yaml")]
    config: PathBuf,

    #[arg(long)]
    columns: Option<usize>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    win_length: Option<usize>,

    #[arg(long, value_delimiter = ',')]
    players: Vec<String>,

    /// Store the effective settings back into the config file
    #[arg(long)]
    write_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Comma-separated 1-based columns, e.g. "4,4,3,5"
    #[arg(default_value = "")]
    moves: String,
}

fn effective_settings(mut settings: GameSettings, args: &Args) -> GameSettings {
    if let Some(columns) = args.columns {
        settings.column_count = columns;
    }
    if let Some(rows) = args.rows {
        settings.row_count = rows;
    }
    if let Some(win_length) = args.win_length {
        settings.win_length = win_length;
    }
    if !args.players.is_empty() {
        settings.player_names = args.players.clone();
    }
    settings
}

/// Config file (or defaults), then command-line overrides, then validation.
/// With `--write-config` the effective settings are stored back.
fn resolve_settings(args: &Args) -> Result<GameSettings, String> {
    let store: SettingsStore<FileSettingsSource, GameSettings> =
        SettingsStore::from_yaml_file(&args.config);
    let settings = effective_settings(store.load()?, args);
    settings
        .validate()
        .map_err(|e| format!("Invalid settings: {}", e))?;

    if args.write_config {
        store.save(&settings)?;
        log!("Saved settings to {}", args.config.display());
    }
    Ok(settings)
}

fn play_moves(game: &mut Game, moves: &str) {
    for (index, column) in parse_column_list(moves).into_iter().enumerate() {
        let move_number = index + 1;
        if game.is_over() {
            log!("Round already decided, ignoring moves from #{}", move_number);
            break;
        }

        let player = game.current_player().name.clone();
        match column {
            Some(column_index) if game.add_checker(column_index) => {
                debug_log!("Move #{}: {} -> column {}", move_number, player, column_index);
            }
            Some(column_index) => {
                log!("Move #{}: column {} rejected for {}", move_number, column_index, player);
            }
            None => {
                log!("Move #{}: not a column number, skipped", move_number);
            }
        }
    }
}

fn report(game: &Game) {
    match game.game_state() {
        GameState::Won => {
            if let (Some(winner), Some(line)) = (game.winner(), game.board().winning_line()) {
                log!(
                    "{} won with {} in a row from column {} row {} to column {} row {}",
                    winner.name,
                    line.length,
                    line.start.column + 1,
                    line.start.row + 1,
                    line.end.column + 1,
                    line.end.row + 1
                );
            }
        }
        GameState::Draw => log!("Draw: the board is full"),
        GameState::Active => log!("Round still active, {} to move", game.current_player().name),
    }

    for player in game.players() {
        log!("  #{} {}: {} win(s)", player.player_id, player.name, player.wins);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("ConnectFour".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let settings = resolve_settings(&args)?;

    let mut game = Game::new(&settings);
    log!(
        "{}x{} board, {} in a row, players: {}",
        settings.column_count,
        settings.row_count,
        settings.win_length,
        settings.player_names.join(", ")
    );

    play_moves(&mut game, &args.moves);
    report(&game);

    Ok(())
}
