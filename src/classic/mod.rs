use std::collections::VecDeque;
use std::path::Path;
use std::time::{Duration, Instant};

use minifb::{Key, KeyRepeat, Scale, ScaleMode, Window, WindowOptions};

use crate::basic::{Dir, GridDim, GridPoint};
use crate::error::Result;
use crate::food::Type;
use crate::game::{Crash, Prefs, Round, TickOutcome};
use crate::high_score::HighScore;

mod framebuffer;

use framebuffer::Framebuffer;

/// Pixels per board cell.
pub const CELL_PX: usize = 10;

// 0RGB
const BACKGROUND: u32 = 0x00ffffff;
const WALL: u32 = 0x002040a0;
const SNAKE_HEAD: u32 = 0x00a01818;
const SNAKE_BODY: u32 = 0x00d03030;
const FOOD: u32 = 0x00000000;
const SPECIAL_FOOD: u32 = 0x00f5c040;

fn map_key(key: Key) -> Option<Dir> {
    match key {
        Key::Up | Key::W => Some(Dir::U),
        Key::Down | Key::S => Some(Dir::D),
        Key::Left | Key::A => Some(Dir::L),
        Key::Right | Key::D => Some(Dir::R),
        _ => None,
    }
}

/// Run the classic variant to completion: one window, one run, summary
/// on stdout. Q or Escape abandons the run.
pub fn run(prefs: Prefs, high_score_path: &Path) -> Result<()> {
    let GridDim { x: board_w, y: board_h } = prefs.board_dim;
    let (width, height) = (board_w as usize * CELL_PX, board_h as usize * CELL_PX);

    let mut window = Window::new(
        "Snake",
        width,
        height,
        WindowOptions {
            scale: Scale::X1,
            scale_mode: ScaleMode::UpperLeft,
            ..WindowOptions::default()
        },
    )?;
    // redraw at ~60fps no matter how slow the game ticks
    window.limit_update_rate(Some(Duration::from_micros(16_600)));

    let mut high_score = HighScore::load(high_score_path);
    let mut round = Round::new(prefs);
    let mut framebuffer = Framebuffer::new(width, height);
    // presses buffered until the next tick so quick taps are not lost
    let mut turns: VecDeque<Dir> = VecDeque::new();
    let mut last_tick = Instant::now();
    let mut crash = None;

    while window.is_open() && crash.is_none() {
        if window.is_key_down(Key::Escape) || window.is_key_down(Key::Q) {
            break;
        }
        for key in window.get_keys_pressed(KeyRepeat::Yes) {
            if let Some(dir) = map_key(key) {
                turns.push_back(dir);
            }
        }

        let now = Instant::now();
        if now.duration_since(last_tick) >= round.tick_interval {
            while let Some(dir) = turns.pop_front() {
                round.snake.request_dir(dir);
            }
            if let TickOutcome::Crashed(cause) = round.tick(now) {
                crash = Some(cause);
            }
            last_tick = now;
        }

        draw(&mut framebuffer, &round);
        window.update_with_buffer(framebuffer.pixels(), width, height)?;
    }

    // abandoning a run with Q/Escape does not count
    let new_high = crash.is_some() && high_score.record(round.score);
    match crash {
        Some(Crash::Wall) => println!("The snake ran into the wall."),
        Some(Crash::SelfHit) => println!("The snake bit itself."),
        None => {}
    }
    println!("Score: {}", round.score);
    if new_high {
        println!("New high score!");
    } else {
        println!("High score: {}", high_score.value);
    }
    Ok(())
}

fn draw(framebuffer: &mut Framebuffer, round: &Round) {
    framebuffer.clear(BACKGROUND);

    let GridDim { x: board_w, y: board_h } = round.board_dim();
    for x in 0..board_w {
        framebuffer.fill_cell(GridPoint { x, y: 0 }, CELL_PX, WALL);
        framebuffer.fill_cell(GridPoint { x, y: board_h - 1 }, CELL_PX, WALL);
    }
    for y in 0..board_h {
        framebuffer.fill_cell(GridPoint { x: 0, y }, CELL_PX, WALL);
        framebuffer.fill_cell(GridPoint { x: board_w - 1, y }, CELL_PX, WALL);
    }

    for food in round.food.iter().chain(round.special_food.iter()) {
        let color = match food.food_type {
            Type::Normal => FOOD,
            Type::Special { .. } => SPECIAL_FOOD,
        };
        framebuffer.fill_cell(food.pos, CELL_PX, color);
    }

    for (i, &segment) in round.snake.segments.iter().enumerate() {
        let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        framebuffer.fill_cell(segment, CELL_PX, color);
    }
}
