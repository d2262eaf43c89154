//! Lattice descriptor: per-axis cardinalities of the search space.
//!
//! A [`Lattice`] describes the implicit set of all coordinate vectors bounded
//! by its cardinality vector. It is a pure descriptor — the point set is never
//! materialized, only validated against.

use crate::error::SearchError;

/// Immutable description of an n-dimensional integer lattice.
///
/// One axis per decision variable; `cardinalities[i]` is the exclusive upper
/// bound for axis `i`. The dimension is fixed at construction and never
/// mutated.
///
/// # Examples
///
/// ```
/// use lattice_search::lattice::Lattice;
///
/// let lattice = Lattice::new(vec![3, 2]);
/// assert_eq!(lattice.dimension(), 2);
/// assert_eq!(lattice.cardinality(0).unwrap(), 3);
/// assert_eq!(lattice.size(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    cardinalities: Vec<usize>,
}

impl Lattice {
    /// Creates a lattice from a cardinality vector.
    ///
    /// # Panics
    ///
    /// Panics if any cardinality is zero. An axis with no legal values is a
    /// programmer error, not a recoverable condition.
    pub fn new(cardinalities: Vec<usize>) -> Self {
        assert!(
            cardinalities.iter().all(|&c| c >= 1),
            "every axis cardinality must be at least 1"
        );
        Self { cardinalities }
    }

    /// Number of axes (decision variables).
    pub fn dimension(&self) -> usize {
        self.cardinalities.len()
    }

    /// Exclusive upper bound for `axis`.
    pub fn cardinality(&self, axis: usize) -> Result<usize, SearchError> {
        self.cardinalities
            .get(axis)
            .copied()
            .ok_or(SearchError::AxisOutOfRange {
                axis,
                dimension: self.cardinalities.len(),
            })
    }

    /// The full cardinality vector.
    pub fn cardinalities(&self) -> &[usize] {
        &self.cardinalities
    }

    /// Total number of lattice points. Diagnostic only — the lattice itself
    /// is never enumerated.
    pub fn size(&self) -> u128 {
        self.cardinalities.iter().map(|&c| c as u128).product()
    }

    /// Checks that `coordinates` is a valid point of this lattice.
    pub fn validate_coordinates(&self, coordinates: &[usize]) -> Result<(), SearchError> {
        if coordinates.len() != self.cardinalities.len() {
            return Err(SearchError::DimensionMismatch {
                expected: self.cardinalities.len(),
                got: coordinates.len(),
            });
        }
        for (axis, (&value, &cardinality)) in
            coordinates.iter().zip(&self.cardinalities).enumerate()
        {
            if value >= cardinality {
                return Err(SearchError::InvalidCoordinate {
                    axis,
                    value,
                    cardinality,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_and_cardinalities() {
        let lattice = Lattice::new(vec![4, 1, 9]);
        assert_eq!(lattice.dimension(), 3);
        assert_eq!(lattice.cardinalities(), &[4, 1, 9]);
        assert_eq!(lattice.cardinality(0).unwrap(), 4);
        assert_eq!(lattice.cardinality(2).unwrap(), 9);
    }

    #[test]
    fn test_cardinality_axis_out_of_range() {
        let lattice = Lattice::new(vec![4, 1]);
        let err = lattice.cardinality(2).unwrap_err();
        assert!(matches!(
            err,
            SearchError::AxisOutOfRange {
                axis: 2,
                dimension: 2
            }
        ));
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_zero_cardinality_rejected() {
        Lattice::new(vec![3, 0, 2]);
    }

    #[test]
    fn test_size() {
        assert_eq!(Lattice::new(vec![3, 2]).size(), 6);
        assert_eq!(Lattice::new(vec![1]).size(), 1);
        // Empty lattice has exactly one point: the empty vector.
        assert_eq!(Lattice::new(vec![]).size(), 1);
    }

    #[test]
    fn test_validate_coordinates_ok() {
        let lattice = Lattice::new(vec![3, 2]);
        assert!(lattice.validate_coordinates(&[0, 0]).is_ok());
        assert!(lattice.validate_coordinates(&[2, 1]).is_ok());
    }

    #[test]
    fn test_validate_coordinates_wrong_length() {
        let lattice = Lattice::new(vec![3, 2]);
        let err = lattice.validate_coordinates(&[1]).unwrap_err();
        assert!(matches!(
            err,
            SearchError::DimensionMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_validate_coordinates_out_of_range() {
        let lattice = Lattice::new(vec![3, 2]);
        let err = lattice.validate_coordinates(&[0, 2]).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidCoordinate {
                axis: 1,
                value: 2,
                cardinality: 2
            }
        ));
    }
}
