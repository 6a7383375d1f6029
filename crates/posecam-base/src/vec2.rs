use std::ops::Mul;

/// A 2D position or extent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Per-axis product: a normalized position times a frame size gives pixels.
impl<T: Mul<Output = T>> Mul for Vec2<T> {
    type Output = Self;

    fn mul(self, size: Self) -> Self {
        Self::new(self.x * size.x, self.y * size.y)
    }
}
