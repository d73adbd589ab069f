//! Building and reading messages from a client point of view.
//!
//! The encoder functions append to a caller owned buffer and return the
//! number of bytes they added. After every successful call the buffer holds
//! a complete message: the length and checksum fields of the header are
//! patched in place. A failing call leaves the buffer untouched.
//!
//! ```
//! use ppsdk::snmp::{self, AuthLevel, Oid, PduType};
//!
//! let mut buf = [0u8; 64];
//! let mut len = snmp::init_message_header(AuthLevel::User, &mut buf).unwrap();
//! len += snmp::add_pdu_header(PduType::Get, 1, &mut buf).unwrap();
//! len += snmp::add_var_binding(&Oid::int32(3, 1, 5), &[0; 4], &mut buf).unwrap();
//!
//! let (pdu, first) = snmp::get_pdu_header(&buf[..len]).unwrap();
//! assert_eq!(pdu.request_id, 1);
//! let (binding, next) = snmp::get_var_binding(&buf[..len], first.unwrap()).unwrap().unwrap();
//! assert_eq!(binding.oid.command, 5);
//! assert!(snmp::get_var_binding(&buf[..len], next).unwrap().is_none());
//! ```

use log::{debug, trace};

use crate::{
    constants::{
        SNMP_FIRST_BINDING_OFFSET, SNMP_HEADER_LEN, SNMP_MAX_SIZE, SNMP_OID_LEN,
        SNMP_PDU_HEADER_LEN, SNMP_PREAMBLE_1, SNMP_PREAMBLE_2, SNMP_PREAMBLE_LEN,
    },
    error::{EncodeError, ParserError},
    snmp::{
        checksum::SnmpChecksumCalc,
        types::{AuthLevel, MessageHeader, Oid, PduHeader, PduType, VarBinding},
    },
};

/// Initialises the header of an empty message.
///
/// Returns the number of bytes written.
pub fn init_message_header(auth: AuthLevel, message: &mut [u8]) -> Result<usize, EncodeError> {
    if message.len() < SNMP_HEADER_LEN {
        return Err(EncodeError::BufferTooSmall {
            required: SNMP_HEADER_LEN,
            available: message.len(),
        });
    }
    MessageHeader::new(auth).write(&mut message[..SNMP_HEADER_LEN]);
    trace!("snmp: header initialised, auth={:?}", auth);
    Ok(SNMP_HEADER_LEN)
}

/// Adds the (P)rotocol (D)ata (U)nit header right after an initialised
/// message header.
pub fn add_pdu_header(
    pdu_type: PduType,
    request_id: u8,
    message: &mut [u8],
) -> Result<usize, EncodeError> {
    let header = initialised_header(message)?;
    if header.length != 0 {
        debug!("snmp: rejecting second PDU header");
        return Err(EncodeError::PduHeaderPresent);
    }
    if message.len() < SNMP_FIRST_BINDING_OFFSET {
        return Err(EncodeError::BufferTooSmall {
            required: SNMP_FIRST_BINDING_OFFSET,
            available: message.len(),
        });
    }

    let pdu = PduHeader::new(pdu_type, request_id);
    message[SNMP_HEADER_LEN..SNMP_FIRST_BINDING_OFFSET].copy_from_slice(&pdu.to_bytes());
    commit(message, header, SNMP_HEADER_LEN, SNMP_FIRST_BINDING_OFFSET);
    trace!("snmp: PDU header {:?} request_id={}", pdu_type, request_id);
    Ok(SNMP_PDU_HEADER_LEN)
}

/// Appends a variable binding, bounded by the length of `message`
pub fn add_var_binding(oid: &Oid, value: &[u8], message: &mut [u8]) -> Result<usize, EncodeError> {
    let capacity = message.len();
    add_var_binding_safe(oid, value, message, capacity)
}

/// Appends a variable binding without writing past `message_size` bytes.
///
/// Fails with [`EncodeError::BufferTooSmall`] when the binding does not fit,
/// in which case the message is left as it was.
pub fn add_var_binding_safe(
    oid: &Oid,
    value: &[u8],
    message: &mut [u8],
    message_size: usize,
) -> Result<usize, EncodeError> {
    let capacity = message_size.min(message.len());
    let header = initialised_header(message)?;
    if usize::from(header.length) < SNMP_PDU_HEADER_LEN {
        debug!("snmp: variable binding added before the PDU header");
        return Err(EncodeError::PduHeaderMissing);
    }
    if value.len() != usize::from(oid.size) {
        return Err(EncodeError::ValueSizeMismatch {
            expect: usize::from(oid.size),
            got: value.len(),
        });
    }

    let start = header.message_len();
    let end = start + SNMP_OID_LEN + value.len();
    if end > SNMP_MAX_SIZE {
        return Err(EncodeError::MessageTooLarge { size: end });
    }
    if end > capacity {
        debug!(
            "snmp: binding of {} bytes does not fit, {} of {} bytes used",
            end - start,
            start,
            capacity
        );
        return Err(EncodeError::BufferTooSmall {
            required: end,
            available: capacity,
        });
    }

    message[start..start + SNMP_OID_LEN].copy_from_slice(&oid.to_bytes());
    message[start + SNMP_OID_LEN..end].copy_from_slice(value);
    commit(message, header, start, end);
    trace!("snmp: binding {:?} added at offset {}", oid, start);
    Ok(end - start)
}

/// Reads and validates the message header.
///
/// Returns the header and the offset of the PDU header.
pub fn get_message_header(message: &[u8]) -> Result<(MessageHeader, usize), ParserError> {
    let header = validate_message(message)?;
    Ok((header, SNMP_HEADER_LEN))
}

/// Reads the PDU header of a valid message.
///
/// Returns the header and the offset of the first variable binding, `None`
/// when the message carries no bindings.
pub fn get_pdu_header(message: &[u8]) -> Result<(PduHeader, Option<usize>), ParserError> {
    let header = validate_message(message)?;
    let pdu = read_pdu_header(message, &header)?;
    let first = (SNMP_FIRST_BINDING_OFFSET < header.message_len())
        .then_some(SNMP_FIRST_BINDING_OFFSET);
    Ok((pdu, first))
}

/// Reads the variable binding at `offset`.
///
/// Returns the binding and the offset of the next one, or `None` once
/// `offset` reaches the end of the message.
pub fn get_var_binding(
    message: &[u8],
    offset: usize,
) -> Result<Option<(VarBinding<'_>, usize)>, ParserError> {
    let end = declared_end(message)?;
    if offset < SNMP_FIRST_BINDING_OFFSET || offset > end {
        return Err(ParserError::InvalidOffset { offset });
    }
    if offset == end {
        return Ok(None);
    }
    read_binding(message, offset, end).map(Some)
}

/// Preamble, size and checksum validation. On success the declared message
/// fits in `message`.
pub(crate) fn validate_message(message: &[u8]) -> Result<MessageHeader, ParserError> {
    let header = read_header(message)?;
    SnmpChecksumCalc::validate_message(&message[..header.message_len()])?;
    Ok(header)
}

pub(crate) fn read_pdu_header(
    message: &[u8],
    header: &MessageHeader,
) -> Result<PduHeader, ParserError> {
    if usize::from(header.length) < SNMP_PDU_HEADER_LEN {
        return Err(ParserError::InvalidLength {
            length: usize::from(header.length),
        });
    }
    PduHeader::read(&read_array(message, SNMP_HEADER_LEN)).map_err(ParserError::InvalidPduType)
}

/// Reads the binding at `offset`, which must be below `end`
pub(crate) fn read_binding(
    message: &[u8],
    offset: usize,
    end: usize,
) -> Result<(VarBinding<'_>, usize), ParserError> {
    let value_start = offset + SNMP_OID_LEN;
    if value_start > end {
        return Err(ParserError::BindingOverrun { offset });
    }
    let oid = Oid::from_bytes(&read_array(message, offset));
    let value_end = value_start + usize::from(oid.size);
    if value_end > end {
        return Err(ParserError::BindingOverrun { offset });
    }
    let binding = VarBinding {
        oid,
        value: &message[value_start..value_end],
    };
    Ok((binding, value_end))
}

/// Checks the preamble and that the declared size is sane and available
fn read_header(message: &[u8]) -> Result<MessageHeader, ParserError> {
    if message.len() < SNMP_PREAMBLE_LEN {
        return Err(ParserError::Truncated {
            expect: SNMP_HEADER_LEN,
            got: message.len(),
        });
    }
    if message[0] != SNMP_PREAMBLE_1 || message[1] != SNMP_PREAMBLE_2 {
        return Err(ParserError::InvalidPreamble);
    }
    if message.len() < SNMP_HEADER_LEN {
        return Err(ParserError::Truncated {
            expect: SNMP_HEADER_LEN,
            got: message.len(),
        });
    }
    let header = MessageHeader::read(message);
    let total = header.message_len();
    if total > SNMP_MAX_SIZE {
        return Err(ParserError::InvalidLength {
            length: usize::from(header.length),
        });
    }
    if message.len() < total {
        return Err(ParserError::Truncated {
            expect: total,
            got: message.len(),
        });
    }
    Ok(header)
}

fn declared_end(message: &[u8]) -> Result<usize, ParserError> {
    read_header(message).map(|header| header.message_len())
}

/// Header of a buffer prepared by [`init_message_header`]
fn initialised_header(message: &[u8]) -> Result<MessageHeader, EncodeError> {
    if message.len() < SNMP_HEADER_LEN
        || message[0] != SNMP_PREAMBLE_1
        || message[1] != SNMP_PREAMBLE_2
    {
        debug!("snmp: message header not initialised");
        return Err(EncodeError::HeaderMissing);
    }
    Ok(MessageHeader::read(message))
}

/// Folds `message[start..end]` into the checksum and records the new length
fn commit(message: &mut [u8], mut header: MessageHeader, start: usize, end: usize) {
    let mut calc = SnmpChecksumCalc::resume(header.checksum);
    calc.update(&message[start..end]);
    header.checksum = calc.result();
    // `end` never exceeds SNMP_MAX_SIZE
    header.length = (end - SNMP_HEADER_LEN) as u16;
    header.write(&mut message[..SNMP_HEADER_LEN]);
}

fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}
