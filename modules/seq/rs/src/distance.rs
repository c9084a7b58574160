use crate::{Error, Result};

/// Distance metric between two numeric vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Euclidean,
    Manhattan,
}

/// Distance between two equal-length, non-empty vectors, rounded to
/// 3 decimals.
pub fn distance(veca: &[f64], vecb: &[f64], metric: Metric) -> Result<f64> {
    if veca.len() != vecb.len() || veca.is_empty() {
        return Err(Error::DimensionMismatch {
            len1: veca.len(),
            len2: vecb.len(),
        });
    }

    let result = match metric {
        Metric::Euclidean => veca
            .iter()
            .zip(vecb)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt(),
        Metric::Manhattan => veca.iter().zip(vecb).map(|(a, b)| (a - b).abs()).sum(),
    };
    Ok((result * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean() -> eyre::Result<()> {
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0], Metric::Euclidean)?, 5.0);
        assert_eq!(distance(&[1.0], &[1.0], Metric::Euclidean)?, 0.0);
        Ok(())
    }

    #[test]
    fn manhattan() -> eyre::Result<()> {
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0], Metric::Manhattan)?, 7.0);
        assert_eq!(distance(&[1.0, -1.0], &[-1.0, 1.0], Metric::Manhattan)?, 4.0);
        Ok(())
    }

    #[test]
    fn rounding_to_three_decimals() -> eyre::Result<()> {
        assert_eq!(distance(&[0.0], &[0.33333], Metric::Manhattan)?, 0.333);
        assert_eq!(distance(&[0.0, 0.0], &[1.0, 1.0], Metric::Euclidean)?, 1.414);
        Ok(())
    }

    #[test]
    fn dimension_mismatch() {
        let err = distance(&[1.0], &[1.0, 2.0], Metric::Euclidean).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { len1: 1, len2: 2 });

        let err = distance(&[], &[], Metric::Manhattan).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { len1: 0, len2: 0 });
    }
}
