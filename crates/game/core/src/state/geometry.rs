/// Direction a combatant is facing.
///
/// Coordinates follow screen convention: `y` grows downward, so `Up` points
/// toward smaller `y`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Axis-aligned box used for range and facing math.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub center_x: f64,
    pub center_y: f64,
    pub half_width: f64,
    pub half_height: f64,
}

impl BoundingBox {
    pub const fn new(center_x: f64, center_y: f64, half_width: f64, half_height: f64) -> Self {
        Self {
            center_x,
            center_y,
            half_width,
            half_height,
        }
    }

    /// Box of zero extent at the given center.
    pub const fn point(center_x: f64, center_y: f64) -> Self {
        Self::new(center_x, center_y, 0.0, 0.0)
    }

    /// Euclidean distance between the two box centers.
    pub fn center_distance(&self, other: &BoundingBox) -> f64 {
        (other.center_x - self.center_x).hypot(other.center_y - self.center_y)
    }

    pub fn is_well_formed(&self) -> bool {
        self.center_x.is_finite()
            && self.center_y.is_finite()
            && self.half_width.is_finite()
            && self.half_height.is_finite()
            && self.half_width >= 0.0
            && self.half_height >= 0.0
    }
}
