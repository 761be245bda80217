//! Resume upload validation.

use crate::error::NotPdfError;

/// MIME type accepted for resume uploads.
pub const PDF_MIME: &str = "application/pdf";

/// Validate a selected resume file by its browser-reported MIME type.
///
/// The file name is only carried for display and is not inspected.
///
/// # Errors
///
/// Returns [`NotPdfError`] when the file is not a PDF.
pub fn validate_resume(mime: &str) -> Result<(), NotPdfError> {
    if mime == PDF_MIME {
        Ok(())
    } else {
        Err(NotPdfError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_pdf_mime_type() {
        assert_eq!(validate_resume("application/pdf"), Ok(()));
    }

    #[test]
    fn should_reject_other_or_missing_mime_types() {
        assert_eq!(validate_resume("image/png"), Err(NotPdfError));
        assert_eq!(validate_resume("text/html"), Err(NotPdfError));
        assert_eq!(validate_resume(""), Err(NotPdfError));
        assert_eq!(validate_resume("application/PDF"), Err(NotPdfError));
    }
}
