use std::{path::PathBuf, process::ExitCode, thread};

use clap::Parser;
use log::{debug, info, warn};

use hexmaze::{
    core::{Dims, Error},
    logging,
    maze::{
        algorithms::{DepthFirstSearch, MazeSolver, NoObserver},
        load_maze,
        render::render_colored,
        HexMaze,
    },
    settings::Settings,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "hexmaze")]
struct Args {
    #[clap(help = "Maze file to solve")]
    maze: PathBuf,
    #[clap(short, long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action, help = "Redraw the maze after every cell change")]
    animate: bool,
    #[clap(long, action, help = "Print the maze after the search")]
    show: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Log more, can be repeated")]
    verbose: u8,
}

fn load_settings(path: Option<PathBuf>) -> Settings {
    let Some(path) = path.or_else(Settings::default_path) else {
        return Settings::default();
    };

    match Settings::load(&path) {
        Ok(settings) => {
            debug!("settings loaded from {:?}", path);
            settings
        }
        Err(err) => {
            warn!("ignoring settings file {:?}: {}", path, err);
            Settings::default()
        }
    }
}

fn run(args: Args) -> Result<bool, Error> {
    // settings may warn, so the logger comes up first and gets its final level afterwards
    logging::init(logging::raise_level(log::LevelFilter::Warn, args.verbose))?;

    let settings = load_settings(args.config.clone());
    let level = settings.get_log_level().unwrap_or_else(|err| {
        warn!("{}, using warn", err);
        log::LevelFilter::Warn
    });
    logging::set_level(logging::raise_level(level, args.verbose));
    if !settings.get_color() {
        colored::control::set_override(false);
    }

    solve_file(&args, &settings)
}

fn solve_file(args: &Args, settings: &Settings) -> Result<bool, Error> {
    let mut maze = load_maze(&args.maze)?;
    if maze.required_exits() > maze.exit_count() {
        warn!(
            "{} exit(s) required but the maze only has {}",
            maze.required_exits(),
            maze.exit_count()
        );
    }

    let solver = match settings.get_step_limit() {
        Some(limit) => DepthFirstSearch::with_step_limit(limit),
        None => DepthFirstSearch::new(),
    };

    let report = if args.animate {
        let delay = settings.get_frame_delay();
        solver.solve(
            &mut maze,
            Some(|maze: &HexMaze, _: Dims| {
                eprintln!("{}", render_colored(maze));
                thread::sleep(delay);
            }),
        )?
    } else {
        solver.solve(&mut maze, None::<NoObserver>)?
    };

    info!("search finished: {:?}", report);
    if args.show {
        print!("{}", render_colored(&maze));
    }
    println!("{}", report);

    Ok(report.is_success())
}

fn main() -> ExitCode {
    // missing maze argument is reported by clap before anything is loaded
    let args = Args::parse();

    better_panic::install();

    ExitCode::from(exit_status(&run(args)))
}

/// 0 when every required exit was found, 1 for a partial result or any error.
fn exit_status(result: &Result<bool, Error>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    }
}
