use rand::{distr::Alphanumeric, Rng};

/// Prefix shared by every generated report filename.
pub const REPORT_FILENAME_PREFIX: &str = "final_report_";
/// Extension of the documents produced by the report builder.
pub const REPORT_EXTENSION: &str = ".docx";

const RANDOM_SUFFIX_LEN: usize = 10;

/// Generates `final_report_<10 alphanumerics><extension>`.
///
/// The suffix only keeps concurrent downloads in one session apart, so a
/// non-cryptographic thread-local generator is enough.
pub fn generate_report_filename(extension: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{REPORT_FILENAME_PREFIX}{suffix}{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_shape() {
        let name = generate_report_filename(REPORT_EXTENSION);
        let suffix = name
            .strip_prefix(REPORT_FILENAME_PREFIX)
            .and_then(|rest| rest.strip_suffix(REPORT_EXTENSION))
            .expect("filename should carry prefix and extension");

        assert_eq!(suffix.len(), 10);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_consecutive_filenames_differ() {
        let first = generate_report_filename(REPORT_EXTENSION);
        let second = generate_report_filename(REPORT_EXTENSION);
        assert_ne!(first, second);
    }

    #[test]
    fn test_custom_extension() {
        assert!(generate_report_filename(".pdf").ends_with(".pdf"));
    }
}
