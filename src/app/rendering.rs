use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Rect, Text};
use ggez::Context;

use super::palette::Palette;
use crate::basic::{GridDim, GridPoint};
use crate::error::Result;
use crate::food::Type;
use crate::game::Round;

fn cell_rect(pos: GridPoint, cell_size: f32) -> Rect {
    Rect::new(
        pos.x as f32 * cell_size,
        pos.y as f32 * cell_size,
        cell_size,
        cell_size,
    )
}

/// The wall ring around the playfield. Never changes for a given
/// window, the caller caches it.
pub fn wall_mesh(
    ctx: &mut Context,
    board_dim: GridDim,
    cell_size: f32,
    palette: &Palette,
) -> Result<Mesh> {
    let width = board_dim.x as f32 * cell_size;
    let height = board_dim.y as f32 * cell_size;

    let mut builder = MeshBuilder::new();
    for rect in [
        Rect::new(0., 0., width, cell_size),
        Rect::new(0., height - cell_size, width, cell_size),
        Rect::new(0., 0., cell_size, height),
        Rect::new(width - cell_size, 0., cell_size, height),
    ] {
        builder.rectangle(DrawMode::fill(), rect, palette.wall)?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}

/// Snake and food for the current frame in a single mesh.
pub fn board_mesh(
    ctx: &mut Context,
    round: &Round,
    cell_size: f32,
    palette: &Palette,
) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();

    for food in round.food.iter().chain(round.special_food.iter()) {
        let color = match food.food_type {
            Type::Normal => palette.food,
            Type::Special { .. } => palette.special_food,
        };
        builder.rectangle(DrawMode::fill(), cell_rect(food.pos, cell_size), color)?;
    }

    for (i, &segment) in round.snake.segments.iter().enumerate() {
        let color = if i == 0 {
            palette.snake_head
        } else {
            palette.snake_body
        };
        builder.rectangle(DrawMode::fill(), cell_rect(segment, cell_size), color)?;
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}

pub fn draw_text(canvas: &mut Canvas, s: &str, size: f32, dest: [f32; 2], color: Color) {
    let mut text = Text::new(s);
    text.set_scale(size);
    canvas.draw(&text, DrawParam::default().dest(dest).color(color));
}

pub fn draw_text_centered(
    ctx: &mut Context,
    canvas: &mut Canvas,
    s: &str,
    size: f32,
    y: f32,
    window_width: f32,
    color: Color,
) -> Result {
    let mut text = Text::new(s);
    text.set_scale(size);
    let dims = text.measure(ctx)?;
    let x = (window_width - dims.x) / 2.;
    canvas.draw(&text, DrawParam::default().dest([x, y]).color(color));
    Ok(())
}
