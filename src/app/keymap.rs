use ggez::input::keyboard::KeyCode;

use crate::basic::Dir;

/// What a key press means to the game, independent of which screen
/// receives it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Input {
    Turn(Dir),
    /// Enter or Space: start, pause, acknowledge.
    Confirm,
    /// R: back to the game from pause.
    Resume,
    /// Q or Escape: leave the current screen.
    Cancel,
}

/// Arrows and WASD plus the few control keys, everything else is
/// ignored.
pub fn map_key(key: KeyCode) -> Option<Input> {
    use KeyCode::*;

    let input = match key {
        Up | W => Input::Turn(Dir::U),
        Down | S => Input::Turn(Dir::D),
        Left | A => Input::Turn(Dir::L),
        Right | D => Input::Turn(Dir::R),
        Return | Space => Input::Confirm,
        R => Input::Resume,
        Q | Escape => Input::Cancel,
        _ => return None,
    };
    Some(input)
}

#[test]
fn test_arrows_and_wasd_agree() {
    use KeyCode::*;

    for (arrow, letter) in [(Up, W), (Down, S), (Left, A), (Right, D)] {
        assert_eq!(map_key(arrow), map_key(letter));
        assert!(matches!(map_key(arrow), Some(Input::Turn(_))));
    }
    assert_eq!(map_key(F), None);
}
