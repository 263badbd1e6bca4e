/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// Absence of a row is not an error at this level: lookups return `Option`
/// and mutations return whether a row matched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    /// The payload broke a storage-level constraint (check, not-null, type range...).
    #[error("repository.constraint_violation")]
    ConstraintViolation,
    /// The storage backend could not serve the request.
    #[error("repository.unavailable")]
    Unavailable,
}
