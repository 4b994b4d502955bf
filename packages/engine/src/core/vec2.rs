/// 2D vector in scene (pixel) space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_length_between_corners() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(13.0, 16.0);
        assert_eq!((b - a).length(), 5.0);
        assert_eq!((a - a).length(), 0.0);
    }
}
