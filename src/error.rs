/// The errors that can be returned when encoding or decoding.
///
/// Every variant names the input index it was raised at. Only
/// [`Error::InvalidDigitValue`] points at a defect in the encoder itself, all
/// other variants describe malformed encoded input (or, for [`Error::Io`], a
/// failing stream).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An encoder produced a digit outside of `0..=44`.
    InvalidDigitValue { digit: u32, position: usize },
    /// The encoded string contains a character outside of the alphabet.
    InvalidCharacter { character: char, position: usize },
    /// A decoded triplet holds a value above `u16::MAX`.
    AccumulatorOverflow { value: u64, position: usize },
    /// A triplet-encoded string ends with a single dangling character.
    TruncatedInput { position: usize },
    /// A chunk-encoded string ends with a digit count no chunk can produce.
    InvalidChunkLength { length: usize, position: usize },
    /// Reading or writing a stream failed.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl Error {
    /// Returns `true` if the error stems from the encoding arithmetic rather
    /// than from the caller's input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InvalidDigitValue { .. })
    }

    /// The input index the error was raised at, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidDigitValue { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::AccumulatorOverflow { position, .. }
            | Self::TruncatedInput { position }
            | Self::InvalidChunkLength { position, .. } => Some(*position),
            #[cfg(feature = "std")]
            Self::Io(_) => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDigitValue { digit, position } => write!(
                f,
                "digit value {digit} at input index {position} is outside of 0..=44"
            ),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid character {character:?} at index {position}"
            ),
            Self::AccumulatorOverflow { value, position } => write!(
                f,
                "value {value} of group at index {position} exceeds its byte width"
            ),
            Self::TruncatedInput { position } => write!(
                f,
                "unexpected end of input at index {position}, expected at least one more character"
            ),
            Self::InvalidChunkLength { length, position } => write!(
                f,
                "chunk of {length} characters at index {position} has no byte length"
            ),
            #[cfg(feature = "std")]
            Self::Io(kind) => write!(f, "i/o error: {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.kind())
    }
}
