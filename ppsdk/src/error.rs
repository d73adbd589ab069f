use core::fmt;

/// Error returned when a message can not be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The destination can not hold the bytes to be added
    BufferTooSmall { required: usize, available: usize },
    /// The message header was never initialised
    HeaderMissing,
    /// A variable binding was added before the PDU header
    PduHeaderMissing,
    /// The message already carries a PDU header
    PduHeaderPresent,
    /// The payload length does not match the size announced by the OID
    ValueSizeMismatch { expect: usize, got: usize },
    /// The message would exceed the protocol maximum
    MessageTooLarge { size: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "Buffer too small, {} bytes required but only {} available",
                required, available
            ),
            EncodeError::HeaderMissing => f.write_str("Message header not initialised"),
            EncodeError::PduHeaderMissing => f.write_str("PDU header missing"),
            EncodeError::PduHeaderPresent => f.write_str("PDU header already present"),
            EncodeError::ValueSizeMismatch { expect, got } => write!(
                f,
                "Value size mismatch, OID announces {} bytes, got {}",
                expect, got
            ),
            EncodeError::MessageTooLarge { size } => {
                write!(f, "Message of {} bytes exceeds the maximum size", size)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Error that possible during message parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserError {
    InvalidPreamble,
    InvalidChecksum {
        expect: u8,
        got: u8,
    },
    /// Fewer bytes are available than the message announces
    Truncated {
        expect: usize,
        got: usize,
    },
    /// The declared length is out of the range the protocol allows
    InvalidLength {
        length: usize,
    },
    InvalidPduType(u8),
    /// The binding offset points inside the headers or past the message
    InvalidOffset {
        offset: usize,
    },
    /// A binding runs past the declared message length
    BindingOverrun {
        offset: usize,
    },
    /// The stream parser buffer can not hold a whole message
    OutOfMemory {
        required_size: usize,
    },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::InvalidPreamble => f.write_str("Not a valid SNMP preamble"),
            ParserError::InvalidChecksum { expect, got } => write!(
                f,
                "Not valid message checksum, expect {:x}, got {:x}",
                expect, got
            ),
            ParserError::Truncated { expect, got } => write!(
                f,
                "Truncated message, expect {} bytes, got {}",
                expect, got
            ),
            ParserError::InvalidLength { length } => {
                write!(f, "Invalid message length {}", length)
            },
            ParserError::InvalidPduType(t) => write!(f, "Invalid PDU type {:#04x}", t),
            ParserError::InvalidOffset { offset } => {
                write!(f, "Invalid variable binding offset {}", offset)
            },
            ParserError::BindingOverrun { offset } => write!(
                f,
                "Variable binding at offset {} runs past the end of the message",
                offset
            ),
            ParserError::OutOfMemory { required_size } => write!(
                f,
                "Not enough memory, {} bytes required to hold the message",
                required_size
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParserError {}
