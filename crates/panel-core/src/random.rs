use crate::state::MAX_VALUE;

/// Source of pseudo-random numbers
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

/// Draw a value in `0..=MAX_VALUE`.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_value(rng: &mut impl RandomSource) -> u8 {
    (rng.next_u32() % (u32::from(MAX_VALUE) + 1)) as u8
}
