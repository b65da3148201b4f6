use std::ops::{Add, AddAssign, Div, Mul, Sub};

use super::Vec3;

/// 8 bit per channel color. Addition and subtraction saturate at the channel bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
    pub const fn splat(v: u8) -> Color {
        Color { r: v, g: v, b: v }
    }
    pub const BLACK: Color = Color::splat(0);
    pub const WHITE: Color = Color::splat(255);

    /// Maps each component of the normalized vector from [-1, 1] to [0, 255].
    pub fn from_direction(v: Vec3) -> Color {
        let v = (v.normalized() + Vec3::new(1.0, 1.0, 1.0)) * 0.5;
        Color::new(
            (255.0 * v.x()) as u8,
            (255.0 * v.y()) as u8,
            (255.0 * v.z()) as u8,
        )
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        Color::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        *self = *self + other;
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, other: Color) -> Color {
        Color::new(
            self.r.saturating_sub(other.r),
            self.g.saturating_sub(other.g),
            self.b.saturating_sub(other.b),
        )
    }
}

// float to int casts saturate, so scaling clamps to [0, 255]
impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, other: f32) -> Color {
        Color::new(
            (other * self.r as f32) as u8,
            (other * self.g as f32) as u8,
            (other * self.b as f32) as u8,
        )
    }
}

// attenuation, i.e. white is the identity
impl Mul for Color {
    type Output = Color;
    fn mul(self, other: Color) -> Color {
        let channel = |a: u8, b: u8| (a as u16 * b as u16 / 255) as u8;
        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl Div<f64> for Color {
    type Output = Color;
    fn div(self, other: f64) -> Color {
        Color::new(
            (self.r as f64 / other) as u8,
            (self.g as f64 / other) as u8,
            (self.b as f64 / other) as u8,
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Color {
        Color::new(c[0], c[1], c[2])
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> image::Rgb<u8> {
        image::Rgb(c.as_array())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add_and_sub_saturate() {
        let a = Color::new(200, 10, 128);
        let b = Color::new(100, 20, 127);
        assert_eq!(a + b, Color::new(255, 30, 255));
        assert_eq!(a - b, Color::new(100, 0, 1));
        let mut c = Color::WHITE;
        c += Color::WHITE;
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_scale_and_divide_truncate() {
        let c = Color::new(100, 51, 255);
        assert_eq!(c * 0.5f32, Color::new(50, 25, 127));
        assert_eq!(c * 4.0f32, Color::WHITE);
        assert_eq!(c * -1.0f32, Color::BLACK);
        assert_eq!(c / 2.0, Color::new(50, 25, 127));
    }

    #[test]
    fn test_multiply_attenuates() {
        let c = Color::new(255, 128, 10);
        assert_eq!(c * Color::WHITE, c);
        assert_eq!(c * Color::BLACK, Color::BLACK);
        assert_eq!(c * Color::splat(128), Color::new(128, 64, 5));
    }

    #[test]
    fn test_from_direction() {
        assert_eq!(Color::from_direction(Vec3::Z * 3.0), Color::new(127, 127, 255));
        assert_eq!(Color::from_direction(-Vec3::X), Color::new(0, 127, 127));
    }
}
