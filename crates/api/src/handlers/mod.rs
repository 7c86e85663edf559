pub mod admin;
pub mod reports;
pub mod users;

/// Returns the trimmed value of a required text field, or `None` when the
/// field is absent or blank.
pub(crate) fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
