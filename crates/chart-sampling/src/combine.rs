// File: crates/chart-sampling/src/combine.rs
// Summary: Element-wise application of a binary function across two slices.

use crate::error::SamplingError;

/// Returns `[func(a[0], b[0]), func(a[1], b[1]), ...]` with `a.len()` elements.
///
/// `b` must be at least as long as `a`; trailing elements of `b` are ignored.
/// A shorter `b` fails with `LengthMismatch` before `func` is called.
pub fn binary_map<A, B, T, F>(mut func: F, a: &[A], b: &[B]) -> Result<Vec<T>, SamplingError>
where
    A: Copy,
    B: Copy,
    F: FnMut(A, B) -> T,
{
    if b.len() < a.len() {
        return Err(SamplingError::LengthMismatch { left: a.len(), right: b.len() });
    }
    Ok(a.iter().zip(b).map(|(&l, &r)| func(l, r)).collect())
}
