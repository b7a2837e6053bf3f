//! Boolean provider × patient access matrices.

use crate::error::ConfigError;
use rand::Rng;
use std::fmt;

/// A boolean access-grant matrix of shape `providers × patients`.
///
/// Cells are stored in **column-major** order: cell `(provider, patient)`
/// lives at flat index `patient * providers + provider`. Chromosomes use the
/// same order, so a flat gene index maps to the cell at the same index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessMatrix {
    providers: usize,
    patients: usize,
    cells: Vec<bool>,
}

impl AccessMatrix {
    /// An all-denied matrix.
    pub fn empty(providers: usize, patients: usize) -> Self {
        Self {
            providers,
            patients,
            cells: vec![false; providers * patients],
        }
    }

    /// Builds a matrix from column-major cells.
    ///
    /// # Panics
    /// Panics if `cells.len() != providers * patients`.
    pub fn from_column_major(providers: usize, patients: usize, cells: Vec<bool>) -> Self {
        assert_eq!(
            cells.len(),
            providers * patients,
            "cell count must equal providers * patients"
        );
        Self {
            providers,
            patients,
            cells,
        }
    }

    /// Builds a matrix from one row per provider.
    ///
    /// # Panics
    /// Panics if rows have different lengths.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let providers = rows.len();
        let patients = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == patients),
            "all rows must have the same length"
        );
        let mut matrix = Self::empty(providers, patients);
        for (provider, row) in rows.iter().enumerate() {
            for (patient, &granted) in row.iter().enumerate() {
                matrix.set(provider, patient, granted);
            }
        }
        matrix
    }

    /// Random matrix where each cell is granted independently with
    /// probability `grant_probability`.
    ///
    /// Used both for ground-truth policies and for random baselines.
    ///
    /// # Errors
    /// Returns [`ConfigError::RateOutOfRange`] if `grant_probability` is NaN
    /// or outside `[0, 1]`. No randomness is drawn in that case.
    pub fn random<R: Rng>(
        providers: usize,
        patients: usize,
        grant_probability: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&grant_probability) {
            return Err(ConfigError::RateOutOfRange {
                name: "grant_probability",
                value: grant_probability,
            });
        }
        let cells = (0..providers * patients)
            .map(|_| rng.random_bool(grant_probability))
            .collect();
        Ok(Self {
            providers,
            patients,
            cells,
        })
    }

    pub fn providers(&self) -> usize {
        self.providers
    }

    pub fn patients(&self) -> usize {
        self.patients
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, provider: usize, patient: usize) -> usize {
        assert!(
            provider < self.providers && patient < self.patients,
            "cell ({provider}, {patient}) out of bounds for {}x{}",
            self.providers,
            self.patients
        );
        patient * self.providers + provider
    }

    /// Whether `provider` may access `patient`'s record.
    pub fn get(&self, provider: usize, patient: usize) -> bool {
        self.cells[self.index(provider, patient)]
    }

    pub fn set(&mut self, provider: usize, patient: usize, granted: bool) {
        let idx = self.index(provider, patient);
        self.cells[idx] = granted;
    }

    /// Flat column-major cells.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Number of granted cells.
    pub fn grant_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fraction of granted cells; `0.0` for an empty matrix.
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.grant_count() as f64 / self.cells.len() as f64
    }

    /// Number of cells granted in both matrices.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    pub fn overlap(&self, other: &AccessMatrix) -> usize {
        assert_eq!(
            (self.providers, self.patients),
            (other.providers, other.patients),
            "matrices must have the same shape"
        );
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|&(&a, &b)| a && b)
            .count()
    }

    /// Encodes the matrix as a relaxed-binary gene vector (`0.0` / `1.0`).
    pub fn to_genes(&self) -> Vec<f64> {
        self.cells
            .iter()
            .map(|&c| if c { 1.0 } else { 0.0 })
            .collect()
    }
}

impl fmt::Display for AccessMatrix {
    /// One line per provider, `1` for granted and `.` for denied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for provider in 0..self.providers {
            for patient in 0..self.patients {
                let c = if self.get(provider, patient) { '1' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_column_major_layout() {
        let m = AccessMatrix::from_rows(&[vec![true, false, true], vec![false, true, false]]);
        assert_eq!(m.providers(), 2);
        assert_eq!(m.patients(), 3);
        // columns: (p0,p1) for patient 0, then patient 1, then patient 2
        assert_eq!(m.as_slice(), &[true, false, false, true, true, false]);
        assert!(m.get(0, 2));
        assert!(!m.get(1, 2));
    }

    #[test]
    fn test_density_and_overlap() {
        let a = AccessMatrix::from_rows(&[vec![true, false], vec![false, true]]);
        let b = AccessMatrix::from_rows(&[vec![true, true], vec![false, false]]);
        assert_eq!(a.grant_count(), 2);
        assert!((a.density() - 0.5).abs() < 1e-12);
        assert_eq!(a.overlap(&b), 1);
    }

    #[test]
    fn test_empty_density() {
        assert_eq!(AccessMatrix::empty(0, 4).density(), 0.0);
        assert_eq!(AccessMatrix::empty(3, 4).density(), 0.0);
    }

    #[test]
    fn test_random_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(AccessMatrix::random(4, 5, 0.0, &mut rng).unwrap().grant_count(), 0);
        assert_eq!(AccessMatrix::random(4, 5, 1.0, &mut rng).unwrap().grant_count(), 20);
    }

    #[test]
    fn test_random_rejects_invalid_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            AccessMatrix::random(4, 5, 2.0, &mut rng),
            Err(ConfigError::RateOutOfRange {
                name: "grant_probability",
                value: 2.0,
            })
        );
        assert_eq!(
            AccessMatrix::random(4, 5, -0.1, &mut rng),
            Err(ConfigError::RateOutOfRange {
                name: "grant_probability",
                value: -0.1,
            })
        );
        assert!(matches!(
            AccessMatrix::random(4, 5, f64::NAN, &mut rng),
            Err(ConfigError::RateOutOfRange {
                name: "grant_probability",
                ..
            })
        ));
    }

    #[test]
    fn test_random_is_seeded() {
        let a = AccessMatrix::random(10, 10, 0.3, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = AccessMatrix::random(10, 10, 0.3, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let m = AccessMatrix::from_rows(&[vec![true, false], vec![false, true]]);
        assert_eq!(m.to_string(), "1.\n.1\n");
    }

    #[test]
    #[should_panic(expected = "same shape")]
    fn test_overlap_shape_mismatch_panics() {
        AccessMatrix::empty(2, 2).overlap(&AccessMatrix::empty(2, 3));
    }
}
