/// Errors raised when a combinator is given an argument it can't work with.
///
/// Counts are `usize`, so negative limits are already ruled out by the type
/// system; what remains are arguments that are representable but
/// meaningless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Group size of zero.
    ///
    /// `grouper` needs at least one element per group.
    #[error("group size must be at least 1")]
    ZeroGroupSize,
}

pub type Result<T> = std::result::Result<T, Error>;
