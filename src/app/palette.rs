use ggez::graphics::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        }
    };
}

pub struct Palette {
    pub background: Color,
    pub wall: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub special_food: Color,
    pub text: Color,
    pub muted_text: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: gray!(0.08),
            wall: Color::from_rgb(70, 90, 160),
            snake_head: Color::from_rgb(120, 230, 100),
            snake_body: Color::from_rgb(60, 160, 60),
            food: Color::from_rgb(220, 60, 50),
            special_food: Color::from_rgb(245, 192, 64),
            text: gray!(0.95),
            muted_text: gray!(0.6),
        }
    }
}
