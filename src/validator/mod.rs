// Job configuration validation - pure functions over raw form fields
use crate::error::JobError;
use crate::models::NormalizedDims;

/// An empty or non-numeric field is "unset", never zero. Parses through i64
/// so negative input is caught by the range check instead of failing to
/// parse.
fn parse_dimension(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Maps the raw form fields to a well-formed dimension pair or the first
/// validation failure. Folder presence is checked before any dimension work;
/// folder existence is the picker's job and is not re-checked here.
pub fn validate(
    input_folder: &str,
    output_folder: &str,
    width: &str,
    height: &str,
    keep_aspect_ratio: bool,
) -> Result<NormalizedDims, JobError> {
    if input_folder.trim().is_empty() || output_folder.trim().is_empty() {
        return Err(JobError::MissingFolder);
    }

    let width = parse_dimension(width);
    let height = parse_dimension(height);

    if !keep_aspect_ratio {
        let (w, h) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(JobError::InvalidNumber),
        };

        if w < 1 || h < 1 {
            return Err(JobError::OutOfRange);
        }

        // try_from also catches values past u32::MAX, which would otherwise
        // wrap into a zero or tiny dimension
        return Ok(NormalizedDims {
            width: Some(u32::try_from(w).map_err(|_| JobError::OutOfRange)?),
            height: Some(u32::try_from(h).map_err(|_| JobError::OutOfRange)?),
        });
    }

    // Aspect-ratio mode: exactly one dimension must drive the computation.
    let width_valid = width.map_or(false, |v| v > 0);
    let height_valid = height.map_or(false, |v| v > 0);

    match (width_valid, height_valid) {
        (false, false) => Err(JobError::MissingDimension),
        (true, true) => Err(JobError::AmbiguousDimension),
        _ => {
            // A companion field that parsed to something below 1 is a range
            // problem, not an ignorable stray.
            if width.map_or(false, |v| v < 1) || height.map_or(false, |v| v < 1) {
                return Err(JobError::OutOfRange);
            }

            Ok(NormalizedDims {
                width: width
                    .filter(|_| width_valid)
                    .map(u32::try_from)
                    .transpose()
                    .map_err(|_| JobError::OutOfRange)?,
                height: height
                    .filter(|_| height_valid)
                    .map(u32::try_from)
                    .transpose()
                    .map_err(|_| JobError::OutOfRange)?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_dimensions_accepts_both_set() {
        let dims = validate("/in", "/out", "100", "50", false).unwrap();
        assert_eq!(dims.width, Some(100));
        assert_eq!(dims.height, Some(50));
    }

    #[test]
    fn fixed_dimensions_requires_both_numeric() {
        assert_eq!(
            validate("/in", "/out", "", "50", false),
            Err(JobError::InvalidNumber)
        );
        assert_eq!(
            validate("/in", "/out", "100", "abc", false),
            Err(JobError::InvalidNumber)
        );
    }

    #[test]
    fn fixed_dimensions_rejects_values_below_one() {
        assert_eq!(
            validate("/in", "/out", "0", "10", false),
            Err(JobError::OutOfRange)
        );
        assert_eq!(
            validate("/in", "/out", "100", "-3", false),
            Err(JobError::OutOfRange)
        );
    }

    #[test]
    fn fixed_dimensions_rejects_values_past_u32_max() {
        // 2^32 must not wrap into a zero-width job
        assert_eq!(
            validate("/in", "/out", "4294967296", "50", false),
            Err(JobError::OutOfRange)
        );
        assert_eq!(
            validate("/in", "/out", "50", "9999999999", false),
            Err(JobError::OutOfRange)
        );
    }

    #[test]
    fn aspect_ratio_rejects_values_past_u32_max() {
        assert_eq!(
            validate("/in", "/out", "", "4294967297", true),
            Err(JobError::OutOfRange)
        );
        assert_eq!(
            validate("/in", "/out", "4294967296", "", true),
            Err(JobError::OutOfRange)
        );
    }

    #[test]
    fn aspect_ratio_accepts_height_alone() {
        let dims = validate("/in", "/out", "", "80", true).unwrap();
        assert_eq!(dims.width, None);
        assert_eq!(dims.height, Some(80));
    }

    #[test]
    fn aspect_ratio_accepts_width_alone() {
        let dims = validate("/in", "/out", "640", "not a number", true).unwrap();
        assert_eq!(dims.width, Some(640));
        assert_eq!(dims.height, None);
    }

    #[test]
    fn aspect_ratio_rejects_both_dimensions() {
        assert_eq!(
            validate("/in", "/out", "100", "80", true),
            Err(JobError::AmbiguousDimension)
        );
    }

    #[test]
    fn aspect_ratio_rejects_neither_dimension() {
        assert_eq!(
            validate("/in", "/out", "", "", true),
            Err(JobError::MissingDimension)
        );
        assert_eq!(
            validate("/in", "/out", "abc", "", true),
            Err(JobError::MissingDimension)
        );
    }

    #[test]
    fn aspect_ratio_rejects_stray_companion_below_one() {
        assert_eq!(
            validate("/in", "/out", "0", "100", true),
            Err(JobError::OutOfRange)
        );
    }

    #[test]
    fn empty_folders_fail_before_dimension_checks() {
        assert_eq!(
            validate("", "/out", "100", "50", false),
            Err(JobError::MissingFolder)
        );
        assert_eq!(
            validate("/in", "   ", "bad", "bad", false),
            Err(JobError::MissingFolder)
        );
    }

    #[test]
    fn dimension_text_is_trimmed() {
        let dims = validate("/in", "/out", " 100 ", "50", false).unwrap();
        assert_eq!(dims.width, Some(100));
    }
}
