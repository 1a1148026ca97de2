//! Error types.

/// Errors raised by store construction.
///
/// Lookups and removals never fail: a missing key or value is reported
/// through `Option` or `bool` returns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument was outside its accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Result alias used by fallible constructors.
pub type Result<T> = std::result::Result<T, Error>;
