use core::fmt;
use serde::{Deserialize, Serialize};

/// Plain 8-bit RGB color, compared channel by channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const RED: Self = Self::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// CSS notation, ready to hand to a canvas fill style.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn displays_as_css_rgb() {
        assert_eq!(Rgb::new(12, 0, 255).to_string(), "rgb(12, 0, 255)");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Rgb::new(1, 2, 3), Rgb::from((1, 2, 3)));
        assert_ne!(Rgb::new(1, 2, 3), Rgb::new(3, 2, 1));
    }
}
