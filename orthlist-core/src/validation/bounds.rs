//! Dimension and coordinate validation

use crate::error::{MatrixError, Result};

/// Validate a `rows x cols` shape and convert it to storage sizes
///
/// Both counts must be strictly positive.
pub fn validate_dimensions(rows: i32, cols: i32) -> Result<(usize, usize)> {
    if rows <= 0 || cols <= 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    Ok((rows as usize, cols as usize))
}

/// Convert a signed coordinate to an index, or `None` if it falls outside `0..bound`
pub fn checked_index(index: i32, bound: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&index| index < bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(1, 1), Ok((1, 1)));
        assert_eq!(validate_dimensions(3, 7), Ok((3, 7)));

        assert_eq!(
            validate_dimensions(0, 7),
            Err(MatrixError::InvalidDimension { rows: 0, cols: 7 })
        );
        assert_eq!(
            validate_dimensions(3, -1),
            Err(MatrixError::InvalidDimension { rows: 3, cols: -1 })
        );
        assert!(validate_dimensions(i32::MIN, i32::MIN).is_err());
    }

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(0, 3), Some(0));
        assert_eq!(checked_index(2, 3), Some(2));
        assert_eq!(checked_index(3, 3), None);
        assert_eq!(checked_index(-1, 3), None);
        assert_eq!(checked_index(i32::MIN, 3), None);
    }
}
