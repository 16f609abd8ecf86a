//! Directional exposure of a defender relative to its attacker.

use crate::combatant::Combatant;
use crate::state::{BoundingBox, Direction};

/// Where the defender sits as seen from the attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Above,
    Below,
    LeftOf,
    RightOf,
}

impl Orientation {
    /// Orientation of `defender` relative to `attacker`.
    ///
    /// The axis with the larger center separation wins. Ties (including
    /// coincident centers) go to the vertical axis, `Below` when `dy >= 0`.
    pub fn between(attacker: &BoundingBox, defender: &BoundingBox) -> Self {
        let dx = defender.center_x - attacker.center_x;
        let dy = defender.center_y - attacker.center_y;

        if dx.abs() > dy.abs() {
            if dx < 0.0 {
                Orientation::LeftOf
            } else {
                Orientation::RightOf
            }
        } else if dy < 0.0 {
            Orientation::Above
        } else {
            Orientation::Below
        }
    }
}

/// How exposed the defender is to the attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    Front,
    Side,
    Rear,
}

impl Facing {
    /// Combine an orientation with the defender's facing direction.
    pub fn resolve(orientation: Orientation, facing: Direction) -> Self {
        use Direction::*;
        use Orientation::*;

        match (orientation, facing) {
            (Above, Up) | (Below, Down) | (LeftOf, Left) | (RightOf, Right) => Facing::Rear,
            (Above, Down) | (Below, Up) | (LeftOf, Right) | (RightOf, Left) => Facing::Front,
            (Above | Below, Left | Right) | (LeftOf | RightOf, Up | Down) => Facing::Side,
        }
    }
}

/// Facing of `defender` as exposed to `attacker`.
pub fn facing_of<A, D>(attacker: &A, defender: &D) -> Facing
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let orientation = Orientation::between(attacker.position(), defender.position());
    Facing::resolve(orientation, defender.facing_direction())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_uses_dominant_axis() {
        let origin = BoundingBox::point(0.0, 0.0);
        assert_eq!(
            Orientation::between(&origin, &BoundingBox::point(0.0, -5.0)),
            Orientation::Above
        );
        assert_eq!(
            Orientation::between(&origin, &BoundingBox::point(1.0, 5.0)),
            Orientation::Below
        );
        assert_eq!(
            Orientation::between(&origin, &BoundingBox::point(-6.0, 5.0)),
            Orientation::LeftOf
        );
        assert_eq!(
            Orientation::between(&origin, &BoundingBox::point(6.0, -5.0)),
            Orientation::RightOf
        );
    }

    #[test]
    fn orientation_ties_go_vertical() {
        let origin = BoundingBox::point(0.0, 0.0);
        assert_eq!(
            Orientation::between(&origin, &BoundingBox::point(3.0, -3.0)),
            Orientation::Above
        );
        assert_eq!(
            Orientation::between(&origin, &BoundingBox::point(-3.0, 3.0)),
            Orientation::Below
        );
        assert_eq!(Orientation::between(&origin, &origin), Orientation::Below);
    }

    #[test]
    fn facing_table_is_exhaustive() {
        use Direction::*;
        use Facing::*;
        use Orientation::*;

        let table = [
            (Above, [(Up, Rear), (Down, Front), (Left, Side), (Right, Side)]),
            (Below, [(Up, Front), (Down, Rear), (Left, Side), (Right, Side)]),
            (LeftOf, [(Up, Side), (Down, Side), (Left, Rear), (Right, Front)]),
            (RightOf, [(Up, Side), (Down, Side), (Left, Front), (Right, Rear)]),
        ];

        for (orientation, row) in table {
            for (direction, expected) in row {
                assert_eq!(
                    Facing::resolve(orientation, direction),
                    expected,
                    "{orientation} facing {direction}"
                );
            }
        }
    }
}
