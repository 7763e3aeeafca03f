/// Earth-centered, Earth-fixed Cartesian coordinates (kilometers).
///
/// Used both for absolute positions and for displacements between them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl std::ops::Add for Ecef {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Ecef {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Ecef;

    #[test]
    fn add_sub_dot() {
        let a = Ecef::new(1.0, 2.0, -1.0);
        let b = Ecef::new(0.5, -2.0, 3.0);
        assert_eq!(a + b, Ecef::new(1.5, 0.0, 2.0));
        assert_eq!(a - b, Ecef::new(0.5, 4.0, -4.0));
        assert_eq!(a.dot(b), -6.5);
    }

    #[test]
    fn norm_of_pythagorean_triple() {
        assert_eq!(Ecef::new(2.0, 3.0, 6.0).norm(), 7.0);
        assert_eq!(Ecef::ZERO.norm(), 0.0);
        assert_eq!(Ecef::new(-3.0, 0.0, 4.0).as_array(), [-3.0, 0.0, 4.0]);
    }
}
