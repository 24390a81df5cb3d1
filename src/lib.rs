//! Classic square-grid snake with two frontends: a windowed one with
//! menus, pause and a persistent high score, and a bare framebuffer
//! one in the spirit of the old graphics-library games.

#[macro_use]
extern crate derive_more;

pub mod app;
pub mod basic;
pub mod classic;
pub mod error;
pub mod food;
pub mod game;
pub mod high_score;
pub mod snake;
