//! Whole-array rotation ("spin") by a single position.

/// Direction of a single-position spin of the working array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    /// First element moves to the end.
    Left,
    /// Last element moves to the front.
    Right,
}

impl Spin {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Spin {
        match self {
            Spin::Left => Spin::Right,
            Spin::Right => Spin::Left,
        }
    }

    /// Rotates `values` in place by one position in this direction.
    pub fn apply<T>(self, values: &mut [T]) {
        match self {
            Spin::Left => spin_left(values),
            Spin::Right => spin_right(values),
        }
    }
}

/// Rotates the slice one position toward the start.
///
/// The first element is reinserted at the last index. Empty slices are left
/// untouched.
pub fn spin_left<T>(values: &mut [T]) {
    if !values.is_empty() {
        values.rotate_left(1);
    }
}

/// Rotates the slice one position toward the end.
///
/// The last element is reinserted at index 0. Empty slices are left
/// untouched.
pub fn spin_right<T>(values: &mut [T]) {
    if !values.is_empty() {
        values.rotate_right(1);
    }
}
