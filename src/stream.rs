//! Deterministic synthetic input.
//!
//! `number_stream(n)` yields `(37 * i mod 101) / 100` for `i in 0..n`. It has no
//! hidden state, so the sequence is identical across calls and processes, which
//! makes it the canonical input for tests, demos and benches.

const MULTIPLIER: u64 = 37;
const MODULUS: u64 = 101;
const SCALE: f64 = 100.0;

/// The value at index `i` of every number stream.
#[inline]
pub fn stream_value(i: usize) -> f64 {
    // Reduce first so the product stays far below u64::MAX for any index.
    ((MULTIPLIER * (i as u64 % MODULUS)) % MODULUS) as f64 / SCALE
}

/// Iterator over the first `n` stream values.
#[derive(Debug, Clone)]
pub struct NumberStream {
    next: usize,
    end: usize,
}

/// Generates `n` deterministic pseudo-random-looking numbers in `[0, 1]`.
pub fn number_stream(n: usize) -> NumberStream {
    NumberStream { next: 0, end: n }
}

impl Iterator for NumberStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.end {
            return None;
        }
        let value = stream_value(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NumberStream {}

impl std::iter::FusedIterator for NumberStream {}
