use thiserror::Error;

/// Errors returned by the path operations.
///
/// A path that does not resolve is never an error; it is reported through
/// `None`, `false`, or an unchanged copy depending on the operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// The container was `null` or `undefined`.
    #[error("cannot traverse a path on a null or undefined container")]
    NilContainer,
}
