use std::path::PathBuf;
use std::process;

use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use grid_snake::app::App;
use grid_snake::basic::GridDim;
use grid_snake::error::Result;
use grid_snake::game::Prefs;
use grid_snake::high_score;

#[derive(Parser)]
#[command(name = "grid_snake", about = "Classic snake in a window")]
struct Cli {
    /// Board width in cells, walls included
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(i64).range(10..=200))]
    width: i64,

    /// Board height in cells, walls included
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i64).range(10..=200))]
    height: i64,

    /// Cell size in pixels
    #[arg(long, default_value_t = 20.)]
    cell: f32,

    /// High score file
    #[arg(long, default_value = high_score::DEFAULT_PATH)]
    highscore: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result {
    let prefs = Prefs::default().board_dim(GridDim {
        x: cli.width as isize,
        y: cli.height as isize,
    });
    let (width, height) = App::window_size(&prefs, cli.cell);

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "author")
        .window_mode(WindowMode::default().dimensions(width, height))
        .window_setup(WindowSetup::default().title("Snake").vsync(true))
        .build()?;

    let app = App::new(prefs, cli.cell, cli.highscore);
    event::run(ctx, event_loop, app)
}
