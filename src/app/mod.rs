use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::KeyInput;
use ggez::Context;

pub use keymap::Input;
pub use palette::Palette;

pub mod control;
pub mod keymap;
pub mod palette;
pub mod rendering;

use control::Control;

use crate::error::{ErrorConversion, Result};
use crate::game::{Prefs, Round, TickOutcome};
use crate::high_score::HighScore;

const HUD_MARGIN: f32 = 20.;
const HUD_TEXT_SIZE: f32 = 24.;
const TITLE_TEXT_SIZE: f32 = 64.;
const MENU_TEXT_SIZE: f32 = 28.;
const HINT_TEXT_SIZE: f32 = 20.;

/// Which part of the session the player is looking at.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Where a (screen, input) pair leads.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Transition {
    Stay,
    To(Screen),
    Exit,
}

/// The session state machine. Direction input is handled separately,
/// it never changes screens.
pub fn transition(screen: Screen, input: Input) -> Transition {
    use Input::*;
    use Screen::*;

    match (screen, input) {
        (Menu, Confirm) => Transition::To(Playing),
        (Menu, Cancel) => Transition::Exit,
        (Playing, Confirm) => Transition::To(Paused),
        (Paused, Confirm | Resume) => Transition::To(Playing),
        (Paused, Cancel) => Transition::To(Menu),
        (GameOver, Confirm) => Transition::To(Menu),
        _ => Transition::Stay,
    }
}

/// The windowed frontend: one ggez event handler owning the round,
/// the screen state and the high score.
pub struct App {
    screen: Screen,
    round: Round,
    control: Control,
    prefs: Prefs,

    high_score: HighScore,
    /// Whether the run that just ended set a new record.
    new_high: bool,

    /// Key presses buffered between updates, drained in order.
    inputs: VecDeque<Input>,

    cell_size: f32,
    palette: Palette,
    /// Cached, the wall ring never changes for a given window.
    wall_mesh: Option<Mesh>,
}

impl App {
    pub fn new(prefs: Prefs, cell_size: f32, high_score_path: PathBuf) -> Self {
        let round = Round::new(prefs);
        let control = Control::new(round.tick_interval);
        Self {
            screen: Screen::Menu,
            round,
            control,
            prefs,
            high_score: HighScore::load(high_score_path),
            new_high: false,
            inputs: VecDeque::new(),
            cell_size,
            palette: Palette::dark(),
            wall_mesh: None,
        }
    }

    pub fn window_size(prefs: &Prefs, cell_size: f32) -> (f32, f32) {
        (
            prefs.board_dim.x as f32 * cell_size,
            prefs.board_dim.y as f32 * cell_size,
        )
    }

    fn window_width(&self) -> f32 {
        self.prefs.board_dim.x as f32 * self.cell_size
    }

    fn window_height(&self) -> f32 {
        self.prefs.board_dim.y as f32 * self.cell_size
    }

    fn apply_input(&mut self, ctx: &mut Context, input: Input, now: Instant) {
        if let Input::Turn(dir) = input {
            if self.screen == Screen::Playing {
                self.round.snake.request_dir(dir);
            }
            return;
        }

        match transition(self.screen, input) {
            Transition::Stay => {}
            Transition::Exit => ctx.request_quit(),
            Transition::To(next) => {
                match (self.screen, next) {
                    // fresh run on every entry from the menu
                    (Screen::Menu, Screen::Playing) => {
                        self.round = Round::new(self.prefs);
                        self.control = Control::new(self.round.tick_interval);
                        self.new_high = false;
                    }
                    (Screen::Paused, Screen::Playing) => self.control.reset(now),
                    _ => {}
                }
                self.screen = next;
            }
        }
    }

    fn centered(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        s: &str,
        size: f32,
        y: f32,
    ) -> Result {
        rendering::draw_text_centered(ctx, canvas, s, size, y, self.window_width(), self.palette.text)
    }

    fn centered_muted(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        s: &str,
        size: f32,
        y: f32,
    ) -> Result {
        rendering::draw_text_centered(
            ctx,
            canvas,
            s,
            size,
            y,
            self.window_width(),
            self.palette.muted_text,
        )
    }

    fn draw_menu(&self, ctx: &mut Context, canvas: &mut Canvas) -> Result {
        let height = self.window_height();
        self.centered(ctx, canvas, "SNAKE", TITLE_TEXT_SIZE, height / 4.)?;
        self.centered(ctx, canvas, "Enter to start", MENU_TEXT_SIZE, height / 2.)?;
        self.centered_muted(ctx, canvas, "Q to quit", HINT_TEXT_SIZE, height / 2. + 40.)?;
        if self.high_score.value > 0 {
            let text = format!("High score: {}", self.high_score.value);
            self.centered_muted(ctx, canvas, &text, HINT_TEXT_SIZE, height * 3. / 4.)?;
        }
        Ok(())
    }

    fn draw_game(&mut self, ctx: &mut Context, canvas: &mut Canvas) -> Result {
        if self.wall_mesh.is_none() {
            self.wall_mesh = Some(
                rendering::wall_mesh(ctx, self.prefs.board_dim, self.cell_size, &self.palette)
                    .with_trace_step("wall_mesh")?,
            );
        }
        canvas.draw(self.wall_mesh.as_ref().unwrap(), DrawParam::default());

        let board_mesh = rendering::board_mesh(ctx, &self.round, self.cell_size, &self.palette)
            .with_trace_step("board_mesh")?;
        canvas.draw(&board_mesh, DrawParam::default());

        let hud = format!(
            "Score: {}    High score: {}",
            self.round.score, self.high_score.value
        );
        rendering::draw_text(
            canvas,
            &hud,
            HUD_TEXT_SIZE,
            [HUD_MARGIN, HUD_MARGIN],
            self.palette.text,
        );

        let height = self.window_height();
        match self.screen {
            Screen::Paused => {
                self.centered(ctx, canvas, "Paused", TITLE_TEXT_SIZE, height / 3.)?;
                self.centered_muted(
                    ctx,
                    canvas,
                    "Space or R to resume, Q for the menu",
                    HINT_TEXT_SIZE,
                    height / 3. + 80.,
                )?;
            }
            Screen::GameOver => {
                self.centered(ctx, canvas, "Game over", TITLE_TEXT_SIZE, height / 3.)?;
                let text = format!("Score: {}", self.round.score);
                self.centered(ctx, canvas, &text, MENU_TEXT_SIZE, height / 3. + 80.)?;
                if self.new_high {
                    self.centered(
                        ctx,
                        canvas,
                        "New high score!",
                        MENU_TEXT_SIZE,
                        height / 3. + 120.,
                    )?;
                }
                self.centered_muted(
                    ctx,
                    canvas,
                    "Enter for the menu",
                    HINT_TEXT_SIZE,
                    height / 3. + 170.,
                )?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl EventHandler<crate::error::Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        let now = Instant::now();

        while let Some(input) = self.inputs.pop_front() {
            self.apply_input(ctx, input, now);
        }

        if self.screen == Screen::Playing {
            for _ in 0..self.control.num_updates(now) {
                match self.round.tick(now) {
                    TickOutcome::Crashed(_) => {
                        self.new_high = self.high_score.record(self.round.score);
                        self.screen = Screen::GameOver;
                        break;
                    }
                    TickOutcome::AteFood | TickOutcome::AteSpecial => {
                        self.control.set_tick_interval(self.round.tick_interval);
                    }
                    TickOutcome::Alive => {}
                }
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background);
        match self.screen {
            Screen::Menu => self.draw_menu(ctx, &mut canvas)?,
            _ => self.draw_game(ctx, &mut canvas)?,
        }
        canvas.finish(ctx).map_err(crate::error::Error::from)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        if let Some(keycode) = input.keycode {
            if let Some(input) = keymap::map_key(keycode) {
                self.inputs.push_back(input);
            }
        }
        Ok(())
    }
}
