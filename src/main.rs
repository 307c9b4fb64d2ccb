use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flywarrior::build_info;
use flywarrior::core::constants::INPUT_POLL_MS;
use flywarrior::core::{process_input, tick_game, FlyWarriorGame, GameConfig, GameInput};
use flywarrior::input::map_event;
use flywarrior::ui::{draw_ui, play_field_area};
use flywarrior::utils::logging;
use log::LevelFilter;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

/// Command line options.
struct CliArgs {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: LevelFilter,
    seed: Option<u64>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            log_file: None,
            log_level: LevelFilter::Info,
            seed: None,
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'flywarrior --help' for usage.");
            process::exit(1);
        }
    };

    if let Some(path) = &cli.log_file {
        if let Err(e) = logging::init_file_logger(path, cli.log_level) {
            eprintln!("Could not open log file {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    let loaded = match &cli.config {
        Some(path) => GameConfig::load(path),
        None => GameConfig::load_default(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not load config: {}", e);
            process::exit(1);
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };
    let mut game = FlyWarriorGame::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &mut rng);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal loop failed: {}", e);
    }
    log::info!("exiting");
    result
}

/// Draw, read input, then advance the game by the wall time since the last pass.
fn run<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut FlyWarriorGame,
    rng: &mut R,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, game))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            let play_field = play_field_area(terminal.size()?);
            if let Some(input) = map_event(event::read()?, play_field) {
                if input == GameInput::Quit {
                    return Ok(());
                }
                process_input(game, input);
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        tick_game(game, dt_ms, rng);
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => cli.config = Some(PathBuf::from(next_value(args, &mut i, "--config")?)),
            "--log" => cli.log_file = Some(PathBuf::from(next_value(args, &mut i, "--log")?)),
            "--log-level" => {
                let raw = next_value(args, &mut i, "--log-level")?;
                cli.log_level = logging::parse_level(raw)
                    .ok_or_else(|| format!("--log-level got an invalid value: {}", raw))?;
            }
            "--seed" => {
                let raw = next_value(args, &mut i, "--seed")?;
                cli.seed = Some(
                    raw.parse()
                        .map_err(|_| format!("--seed got an invalid value: {}", raw))?,
                );
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_string("flywarrior"));
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(cli)
}

/// Value following a flag; advances the cursor past it.
fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn print_help() {
    println!("Fly Warrior - Terminal Side-Scroller\n");
    println!("Usage: flywarrior [options]\n");
    println!("Options:");
    println!("  --config <FILE>      Load game tuning from a JSON file");
    println!("  --log <FILE>         Append log records to FILE");
    println!("  --log-level <LEVEL>  off, error, warn, info, debug, trace (default: info)");
    println!("  --seed <N>           Seed the spawner for a reproducible run");
    println!("  --version            Show version information");
    println!("  --help               Show this help message");
    println!();
    println!("Controls:");
    println!("  Space / Up / Click   Fly");
    println!("  Enter                Start / play again");
    println!("  M                    Back to the menu after a game over");
    println!("  Q / Esc / Ctrl-C     Quit");
}
