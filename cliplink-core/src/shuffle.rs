//! In-place uniform shuffle

use rand::RngExt;

/// Shuffle `items` in place with the thread-local RNG.
///
/// Returns the same slice for chaining.
pub fn shuffle<T>(items: &mut [T]) -> &mut [T] {
    shuffle_with(items, &mut rand::rng())
}

/// Shuffle `items` in place with `rng`.
///
/// Walks a boundary down from the end, swapping the boundary element with a
/// uniformly chosen element of the unprocessed prefix, so every permutation
/// is equally likely given an unbiased `rng`.
pub fn shuffle_with<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
    R: RngExt + ?Sized,
{
    let mut boundary = items.len();
    while boundary != 0 {
        let pick = rng.random_range(0..boundary);
        boundary -= 1;
        items.swap(boundary, pick);
    }
    items
}
