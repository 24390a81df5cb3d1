use std::time::{Duration, Instant};

use rand::Rng;

use super::{Food, Type};
use crate::basic::board::{occupied_cells, random_free_spot};
use crate::basic::GridDim;
use crate::snake::Snake;

/// Regular food on a free cell, `None` when the board is full.
pub fn spawn_food(snake: &Snake, board_dim: GridDim, rng: &mut impl Rng) -> Option<Food> {
    let occupied = occupied_cells(snake, []);
    random_free_spot(&occupied, board_dim, rng).map(|pos| Food { pos, food_type: Type::Normal })
}

/// Special food on a free cell, also avoiding the regular food.
pub fn spawn_special(
    snake: &Snake,
    food: Option<&Food>,
    lifetime: Duration,
    now: Instant,
    board_dim: GridDim,
    rng: &mut impl Rng,
) -> Option<Food> {
    let occupied = occupied_cells(snake, food.map(|food| food.pos));
    random_free_spot(&occupied, board_dim, rng).map(|pos| Food {
        pos,
        food_type: Type::Special { expires_at: now + lifetime },
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::basic::{Dir, GridPoint};

    const DIM: GridDim = GridDim { x: 12, y: 12 };

    #[test]
    fn food_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::new(GridPoint { x: 8, y: 6 }, Dir::R, 6);
        for _ in 0..500 {
            let food = spawn_food(&snake, DIM, &mut rng).unwrap();
            assert!(!snake.occupies(food.pos));
        }
    }

    #[test]
    fn special_also_avoids_regular_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Instant::now();
        let snake = Snake::new(GridPoint { x: 8, y: 6 }, Dir::R, 6);
        let food = spawn_food(&snake, DIM, &mut rng).unwrap();
        for _ in 0..500 {
            let special = spawn_special(
                &snake,
                Some(&food),
                Duration::from_secs(5),
                now,
                DIM,
                &mut rng,
            )
            .unwrap();
            assert!(!snake.occupies(special.pos));
            assert_ne!(special.pos, food.pos);
            assert!(!special.is_expired(now));
            assert!(special.is_expired(now + Duration::from_secs(6)));
        }
    }
}
