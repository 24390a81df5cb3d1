use std::path::PathBuf;
use std::process;

use clap::Parser;

use grid_snake::basic::GridDim;
use grid_snake::classic;
use grid_snake::game::Prefs;
use grid_snake::high_score;

#[derive(Parser)]
#[command(name = "grid_snake_classic", about = "Classic snake on a raw framebuffer")]
struct Cli {
    /// Board width in cells, walls included
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(i64).range(10..=200))]
    width: i64,

    /// Board height in cells, walls included
    #[arg(long, default_value_t = 48, value_parser = clap::value_parser!(i64).range(10..=200))]
    height: i64,

    /// High score file
    #[arg(long, default_value = high_score::DEFAULT_PATH)]
    highscore: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // single-segment start, plain food only
    let prefs = Prefs::default()
        .board_dim(GridDim {
            x: cli.width as isize,
            y: cli.height as isize,
        })
        .start_len(1)
        .special_food(false);

    if let Err(e) = classic::run(prefs, &cli.highscore) {
        eprintln!("{e}");
        process::exit(1);
    }
}
