use thiserror::Error;

/// Failures while rendering the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV rendering failed: {0}")]
    Render(#[from] csv::Error),
    #[error("CSV writer finalization failed: {0}")]
    Finish(String),
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render a sequence of valid addresses as a one-column CSV.
///
/// Output is an `email` header followed by one address per line. Formatting
/// only — the addresses are expected to come from a sanitization report and
/// are not re-validated here.
pub fn valid_emails_csv(emails: &[String]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["email"])?;
    for email in emails {
        writer.write_record([email.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Finish(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let csv = valid_emails_csv(&["a@b.com".to_string(), "c@d.com".to_string()]).unwrap();
        assert_eq!(csv, "email\na@b.com\nc@d.com\n");
    }

    #[test]
    fn empty_input_renders_header_only() {
        let csv = valid_emails_csv(&[]).unwrap();
        assert_eq!(csv, "email\n");
    }

    #[test]
    fn quotes_fields_that_need_escaping() {
        let csv = valid_emails_csv(&["a,b@c.com".to_string()]).unwrap();
        assert_eq!(csv, "email\n\"a,b@c.com\"\n");
    }
}
