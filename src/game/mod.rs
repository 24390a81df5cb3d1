use std::cmp::max;
use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;

pub use prefs::Prefs;

mod prefs;

use crate::basic::{Dir, GridDim, GridPoint};
use crate::food::{spawn, Food};
use crate::snake::Snake;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Crash {
    Wall,
    SelfHit,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TickOutcome {
    Alive,
    AteFood,
    AteSpecial,
    Crashed(Crash),
}

/// One run of the game, from the first tick to the crash that ends it.
///
/// The round owns all simulation state and advances it one cell per
/// [`Round::tick`]. It knows nothing about rendering or input devices;
/// frontends feed direction requests to [`Round::snake`] and read the
/// fields back out to draw.
pub struct Round {
    pub snake: Snake,
    /// Absent only when the snake covers the whole interior.
    pub food: Option<Food>,
    pub special_food: Option<Food>,
    pub score: u32,
    /// Current time between ticks, shrinks as food is eaten.
    pub tick_interval: Duration,
    pub prefs: Prefs,
    rng: ThreadRng,
}

impl Round {
    pub fn new(prefs: Prefs) -> Self {
        let GridDim { x, y } = prefs.board_dim;
        let snake = Snake::new(GridPoint { x: x / 2, y: y / 2 }, Dir::R, prefs.start_len);
        let mut rng = rand::thread_rng();
        let food = spawn::spawn_food(&snake, prefs.board_dim, &mut rng);
        Self {
            snake,
            food,
            special_food: None,
            score: 0,
            tick_interval: prefs.start_interval,
            prefs,
            rng,
        }
    }

    pub fn board_dim(&self) -> GridDim {
        self.prefs.board_dim
    }

    fn hits_wall(&self, head: GridPoint) -> bool {
        let GridDim { x, y } = self.prefs.board_dim;
        head.x <= 0 || head.x >= x - 1 || head.y <= 0 || head.y >= y - 1
    }

    /// Advance the simulation by exactly one cell.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let head = self.snake.advance();

        if self.hits_wall(head) {
            return TickOutcome::Crashed(Crash::Wall);
        }
        if self.snake.hits_self() {
            return TickOutcome::Crashed(Crash::SelfHit);
        }

        let mut outcome = TickOutcome::Alive;

        if self.food.map(|food| food.pos) == Some(head) {
            self.score += self.prefs.food_value;
            self.snake.grow_tail(1);
            self.tick_interval = max(
                self.tick_interval.saturating_sub(self.prefs.speedup),
                self.prefs.min_interval,
            );
            self.food = spawn::spawn_food(&self.snake, self.prefs.board_dim, &mut self.rng);
            if self.prefs.special_food && self.score % self.prefs.special_milestone == 0 {
                self.special_food = spawn::spawn_special(
                    &self.snake,
                    self.food.as_ref(),
                    self.prefs.special_lifetime,
                    now,
                    self.prefs.board_dim,
                    &mut self.rng,
                );
            }
            outcome = TickOutcome::AteFood;
        } else if self.special_food.map(|food| food.pos) == Some(head) {
            self.score += self.prefs.special_value;
            self.snake.grow_tail(2);
            self.special_food = None;
            outcome = TickOutcome::AteSpecial;
        }

        // checked after collection, food grabbed on its last tick counts
        if self.special_food.map_or(false, |special| special.is_expired(now)) {
            self.special_food = None;
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Type;

    fn round() -> Round {
        Round::new(Prefs::default())
    }

    fn food_at(pos: GridPoint) -> Food {
        Food { pos, food_type: Type::Normal }
    }

    fn special_at(pos: GridPoint, expires_at: Instant) -> Food {
        Food { pos, food_type: Type::Special { expires_at } }
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 10, y: 10 }, Dir::R, 3);
        round.food = Some(food_at(GridPoint { x: 11, y: 10 }));
        let interval_before = round.tick_interval;

        assert_eq!(round.tick(Instant::now()), TickOutcome::AteFood);
        assert_eq!(round.snake.head(), GridPoint { x: 11, y: 10 });
        assert_eq!(round.snake.len(), 4);
        assert_eq!(round.score, 1);
        assert!(round.tick_interval < interval_before);

        // food was respawned somewhere off the snake
        let food = round.food.unwrap();
        assert!(!round.snake.occupies(food.pos));
    }

    #[test]
    fn plain_tick_keeps_length_and_score() {
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 10, y: 10 }, Dir::R, 3);
        round.food = Some(food_at(GridPoint { x: 2, y: 2 }));

        assert_eq!(round.tick(Instant::now()), TickOutcome::Alive);
        assert_eq!(round.snake.len(), 3);
        assert_eq!(round.score, 0);
    }

    #[test]
    fn wall_crash_wins_over_pending_food() {
        let mut round = round();
        let GridDim { x, .. } = round.board_dim();
        round.snake = Snake::new(GridPoint { x: x - 2, y: 10 }, Dir::R, 3);
        // even food sitting on the boundary cell cannot save the run
        round.food = Some(food_at(GridPoint { x: x - 1, y: 10 }));

        assert_eq!(round.tick(Instant::now()), TickOutcome::Crashed(Crash::Wall));
        assert_eq!(round.score, 0);
        assert_eq!(round.snake.len(), 3);
    }

    #[test]
    fn left_wall_is_terminal_too() {
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 1, y: 10 }, Dir::L, 1);
        assert_eq!(round.tick(Instant::now()), TickOutcome::Crashed(Crash::Wall));
    }

    #[test]
    fn biting_own_body_is_terminal() {
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 10, y: 10 }, Dir::R, 6);
        round.food = Some(food_at(GridPoint { x: 2, y: 2 }));
        for dir in [Dir::U, Dir::L, Dir::D] {
            round.snake.request_dir(dir);
            match round.tick(Instant::now()) {
                TickOutcome::Alive => {}
                outcome => {
                    assert_eq!(outcome, TickOutcome::Crashed(Crash::SelfHit));
                    return;
                }
            }
        }
        panic!("snake should have bitten itself");
    }

    #[test]
    fn special_food_scores_big_and_grows_twice() {
        let now = Instant::now();
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 10, y: 10 }, Dir::R, 3);
        round.food = Some(food_at(GridPoint { x: 2, y: 2 }));
        round.special_food = Some(special_at(
            GridPoint { x: 11, y: 10 },
            now + Duration::from_secs(5),
        ));

        assert_eq!(round.tick(now), TickOutcome::AteSpecial);
        assert_eq!(round.score, 5);
        assert_eq!(round.snake.len(), 5);
        assert!(round.special_food.is_none());
    }

    #[test]
    fn uncollected_special_food_expires() {
        let now = Instant::now();
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 10, y: 10 }, Dir::R, 3);
        round.food = Some(food_at(GridPoint { x: 2, y: 2 }));
        round.special_food = Some(special_at(
            GridPoint { x: 20, y: 10 },
            now + Duration::from_secs(5),
        ));

        round.tick(now);
        assert!(round.special_food.is_some());
        round.tick(now + Duration::from_secs(6));
        assert!(round.special_food.is_none());
    }

    #[test]
    fn milestone_score_spawns_special_food() {
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 10, y: 10 }, Dir::R, 3);
        round.score = 9;
        round.food = Some(food_at(GridPoint { x: 11, y: 10 }));

        assert_eq!(round.tick(Instant::now()), TickOutcome::AteFood);
        assert_eq!(round.score, 10);
        let special = round.special_food.expect("special food should have spawned");
        assert!(!round.snake.occupies(special.pos));
        if let Some(food) = round.food {
            assert_ne!(special.pos, food.pos);
        }
    }

    #[test]
    fn tick_interval_is_floored() {
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 10, y: 10 }, Dir::R, 3);
        round.tick_interval = round.prefs.min_interval + Duration::from_millis(2);

        round.food = Some(food_at(GridPoint { x: 11, y: 10 }));
        round.tick(Instant::now());
        assert_eq!(round.tick_interval, round.prefs.min_interval);

        round.food = Some(food_at(GridPoint { x: 12, y: 10 }));
        round.tick(Instant::now());
        assert_eq!(round.tick_interval, round.prefs.min_interval);
    }

    #[test]
    fn score_never_decreases() {
        let mut round = round();
        round.snake = Snake::new(GridPoint { x: 5, y: 10 }, Dir::R, 3);
        let mut last_score = round.score;
        for _ in 0..20 {
            if let TickOutcome::Crashed(_) = round.tick(Instant::now()) {
                break;
            }
            assert!(round.score >= last_score);
            last_score = round.score;
        }
    }
}
