use std::path::PathBuf;

use clap::Parser;
use nim::{BoardSettings, ResetPolicy, Timing};
use nim_cli::{load_settings, play_game, Config, HELP};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Number of rows, i.e. the height of the board (at most 99)
    #[arg(long)]
    rows: Option<u32>,

    /// Number of columns (at most 99)
    #[arg(long)]
    columns: Option<usize>,

    /// Maximum number of tokens in a randomly generated column (default: rows)
    #[arg(long)]
    max_height: Option<u32>,

    /// Explicit column heights, e.g. "3 4 5". Ignored if malformed.
    #[arg(long)]
    board: Option<String>,

    /// Board settings as a JSON file. Command line options take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play against the computer, which goes by this name
    #[arg(long)]
    computer: Option<String>,

    /// Name of the first player
    #[arg(long, default_value = "Player 1")]
    player1: String,

    /// Name of the second player, unless the computer plays
    #[arg(long, default_value = "Player 2")]
    player2: String,

    /// Deal a new random board on reset instead of restarting the same one
    #[arg(long, default_value_t = false)]
    reshuffle_on_reset: bool,

    /// Play the computer's turn without animation delays
    #[arg(long, default_value_t = false)]
    no_delay: bool,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Args {
    fn board_settings(&self) -> anyhow::Result<BoardSettings> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => BoardSettings::default(),
        };
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        if self.max_height.is_some() {
            settings.max_height = self.max_height;
        }
        if self.board.is_some() {
            settings.board = self.board.clone();
        }
        if self.reshuffle_on_reset {
            settings.reset_policy = ResetPolicy::Reshuffle;
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    let settings = args.board_settings()?;
    let player_2 = args.computer.clone().unwrap_or_else(|| args.player2.clone());
    let config = Config {
        rng,
        settings,
        player_names: [args.player1.clone(), player_2],
        computer: args.computer.is_some(),
        timing: if args.no_delay {
            Timing::instant()
        } else {
            Timing::default()
        },
    };

    println!("{}\n", HELP);
    let final_state = play_game(
        config,
        std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )?;
    info!(columns = ?final_state.columns, "Bye");
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // The board goes to stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
