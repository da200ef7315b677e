use thiserror::Error;

/// Failure states of `mpint` operations.
///
/// The variants are the crate's stable contract; `Ok(_)` stands in for the
/// classic `SUCCESS` status. Operator impls (`+`, `*`, `/`, `<<`, ...)
/// panic on these conditions, mirroring how primitive integer operators
/// panic on overflow; every such path also exists as a `checked_*` or
/// otherwise `Result`-returning method.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A result would need more limbs than the instance ceiling allows.
    #[error("operation needs {requested} digits, over the limit of {limit}")]
    DigitsExceeded { requested: usize, limit: usize },

    /// A caller-provided output buffer is too short; `required` is the
    /// number of bytes that would have sufficed.
    #[error("output buffer too small, {required} bytes required")]
    BufferTooSmall { required: usize },

    /// A parsed byte is outside the expected alphabet, or BASE64 padding
    /// appears where it is not allowed.
    #[error("invalid character in input")]
    InvalidCharacter,

    /// The radix is outside the supported range (2..=16 canonical,
    /// 2..=256 with a custom alphabet).
    #[error("radix {0} out of supported range")]
    InvalidRadix(u32),

    /// Some other argument fails a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A byte accessor addressed a position beyond the magnitude.
    #[error("index out of range")]
    OutOfRange,

    /// The divisor (or modulus, or root degree) is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation that requires a non-negative argument received a
    /// negative one (`inv_mod`, even-degree roots, moduli).
    #[error("operation requires a non-negative argument")]
    NegativeArgument,

    /// `inv_mod` found `gcd(a, n) > 1`.
    #[error("no modular inverse exists")]
    NoInverse,

    /// An internal invariant was violated; this should never occur.
    #[error("internal invariant violated")]
    Unexpected,
}

pub type Result<T> = core::result::Result<T, Error>;
