use log::debug;
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::charset::{working_alphabet, CharClass};
use crate::error::ValidationError;

/// Source of uniformly distributed indexes. Production uses the thread local RNG,
/// tests plug in a seeded one so generation is reproducible.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

impl RandomSource for StdRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Generates a password of exactly `length` characters, each sampled independently
/// and uniformly from the working alphabet of `classes`.
///
/// There is no guarantee that every enabled class shows up in the result, and
/// `length` is used as given.
pub fn generate(
    classes: &[CharClass],
    length: usize,
    rng: &mut dyn RandomSource,
) -> Result<String, ValidationError> {
    if classes.is_empty() {
        return Err(ValidationError::NoClassSelected);
    }
    let alphabet = working_alphabet(classes);
    debug!(
        "generating {} characters from an alphabet of {}",
        length,
        alphabet.len()
    );
    Ok((0..length)
        .map(|_| alphabet[rng.next_index(alphabet.len())])
        .collect())
}
