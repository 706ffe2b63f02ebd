//! Mode ordering: largest circles first so smaller epicycles nest inside.

use num_complex::Complex64;

/// Fourier modes in render order: the DC anchor first, then every nonzero
/// mode by descending magnitude.
///
/// Three parallel arrays. `original_indices[m]` is the frequency index the
/// coefficient at sequence position `m` came from — radii are identified by
/// original index, rotation rates by sequence position, and the two must
/// never be conflated.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedModes {
    /// Coefficients in render order.
    pub coefficients: Vec<Complex64>,
    /// Circle radii: `radii[m] = |coefficients[m]|`.
    pub radii: Vec<f64>,
    /// Original frequency index of each entry.
    pub original_indices: Vec<usize>,
}

impl OrderedModes {
    /// Number of kept modes.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

/// Order modes for rendering.
///
/// Mode 0 is the path centroid and anchors the construction regardless of
/// its magnitude. The rest are sorted by strictly descending magnitude,
/// ties broken by ascending original index so the permutation is
/// deterministic. Exactly-zero modes draw invisible circles and contribute
/// nothing to the sum, so they are dropped from the non-anchor portion.
pub fn order_modes(coefficients: &[Complex64]) -> OrderedModes {
    let mut rest: Vec<usize> = (1..coefficients.len())
        .filter(|&k| coefficients[k].norm() > 0.0)
        .collect();
    rest.sort_by(|&a, &b| {
        coefficients[b]
            .norm()
            .total_cmp(&coefficients[a].norm())
            .then(a.cmp(&b))
    });

    let mut original_indices = Vec::with_capacity(rest.len() + 1);
    if !coefficients.is_empty() {
        original_indices.push(0);
    }
    original_indices.extend(rest);

    let ordered: Vec<Complex64> = original_indices.iter().map(|&k| coefficients[k]).collect();
    let radii = ordered.iter().map(|c| c.norm()).collect();

    OrderedModes {
        coefficients: ordered,
        radii,
        original_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_anchor_first_even_when_zero() {
        let modes = order_modes(&[c(0.0, 0.0), c(5.0, 0.0), c(1.0, 0.0)]);
        assert_eq!(modes.original_indices[0], 0);
        assert_eq!(modes.radii[0], 0.0);
    }

    #[test]
    fn test_descending_magnitude() {
        let modes = order_modes(&[c(1.0, 0.0), c(0.5, 0.0), c(4.0, 0.0), c(2.0, 0.0)]);
        assert_eq!(modes.original_indices, vec![0, 2, 3, 1]);
        for pair in modes.radii[1..].windows(2) {
            assert!(pair[0] >= pair[1], "radii not non-increasing: {pair:?}");
        }
    }

    #[test]
    fn test_zero_modes_dropped() {
        let modes = order_modes(&[c(1.0, 1.0), c(0.0, 0.0), c(3.0, 0.0), c(0.0, 0.0)]);
        assert_eq!(modes.original_indices, vec![0, 2]);
        assert!(modes.radii[1..].iter().all(|&r| r > 0.0));
    }

    #[test]
    fn test_ties_broken_by_original_index() {
        let modes = order_modes(&[c(0.0, 0.0), c(0.0, 2.0), c(2.0, 0.0), c(-2.0, 0.0)]);
        assert_eq!(modes.original_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_radii_match_coefficients() {
        let modes = order_modes(&[c(1.0, 0.0), c(3.0, 4.0)]);
        assert_eq!(modes.radii[1], 5.0);
        assert_eq!(modes.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let modes = order_modes(&[]);
        assert!(modes.is_empty());
    }
}
