/// Rotation direction reported by [`QuadratureState::direction()`].
///
/// The numeric values (`i8::from(direction)`) are `0`, `1` and `-1`.
///
/// [`QuadratureState::direction()`]: crate::QuadratureState::direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Position unchanged since the previous query.
    #[default]
    NoRotation,
    /// Position increased since the previous query.
    Clockwise,
    /// Position decreased since the previous query.
    CounterClockwise,
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::NoRotation => 0,
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

impl Direction {
    /// Direction of travel from `previous` to `current`.
    pub fn between(previous: i32, current: i32) -> Self {
        match previous.cmp(&current) {
            core::cmp::Ordering::Less => Direction::Clockwise,
            core::cmp::Ordering::Greater => Direction::CounterClockwise,
            core::cmp::Ordering::Equal => Direction::NoRotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values() {
        assert_eq!(i8::from(Direction::NoRotation), 0);
        assert_eq!(i8::from(Direction::Clockwise), 1);
        assert_eq!(i8::from(Direction::CounterClockwise), -1);
    }

    #[test]
    fn between_positions() {
        assert_eq!(Direction::between(0, 1), Direction::Clockwise);
        assert_eq!(Direction::between(1, 0), Direction::CounterClockwise);
        assert_eq!(Direction::between(-7, -7), Direction::NoRotation);
        assert_eq!(Direction::between(i32::MAX, i32::MIN), Direction::CounterClockwise);
    }
}
