#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{
    constants::SNMP_FIRST_BINDING_OFFSET,
    error::ParserError,
    snmp::{
        client::{read_binding, read_pdu_header, validate_message},
        types::{MessageHeader, PduHeader, VarBinding},
    },
};
#[cfg(feature = "alloc")]
use crate::{
    constants::SNMP_OID_LEN,
    error::EncodeError,
    snmp::{
        client::{add_pdu_header, add_var_binding, init_message_header},
        types::{AuthLevel, Oid, PduType},
    },
};

/// A validated message borrowed from a byte buffer.
///
/// Construction checks the preamble, the checksum, the PDU header and the
/// layout of every variable binding, so reading from it can not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef<'a> {
    bytes: &'a [u8],
    header: MessageHeader,
    pdu: PduHeader,
}

impl<'a> MessageRef<'a> {
    /// Parses the message at the start of `bytes`. Trailing bytes past the
    /// declared length are ignored.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, ParserError> {
        let header = validate_message(bytes)?;
        let pdu = read_pdu_header(bytes, &header)?;
        let bytes = &bytes[..header.message_len()];

        let mut offset = SNMP_FIRST_BINDING_OFFSET;
        while offset < bytes.len() {
            let (_, next) = read_binding(bytes, offset, bytes.len())?;
            offset = next;
        }

        Ok(Self { bytes, header, pdu })
    }

    pub fn header(&self) -> MessageHeader {
        self.header
    }

    pub fn pdu_header(&self) -> PduHeader {
        self.pdu
    }

    pub fn var_bindings(&self) -> VarBindingIter<'a> {
        VarBindingIter {
            bytes: self.bytes,
            offset: SNMP_FIRST_BINDING_OFFSET,
        }
    }

    /// The raw message, header included
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A message always holds at least its headers
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Iterator over the variable bindings of a [`MessageRef`]
#[derive(Debug, Clone)]
pub struct VarBindingIter<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for VarBindingIter<'a> {
    type Item = VarBinding<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }
        // Layout was checked by MessageRef::parse
        let (binding, next) = read_binding(self.bytes, self.offset, self.bytes.len()).ok()?;
        self.offset = next;
        Some(binding)
    }
}

/// Owned description of a message, encoded through the client functions.
///
/// ```
/// use ppsdk::snmp::{AuthLevel, MessageBuilder, MessageRef, Oid, PduType};
///
/// let bytes = MessageBuilder::new(AuthLevel::Viewer, PduType::Set, 1)
///     .var_binding(Oid::int32(3, 1, 5), &10i32.to_le_bytes())
///     .into_message_bytes()
///     .unwrap();
/// let message = MessageRef::parse(&bytes).unwrap();
/// assert_eq!(message.var_bindings().next().unwrap().value_i32(), Some(10));
/// ```
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBuilder {
    pub auth: AuthLevel,
    pub pdu_type: PduType,
    pub request_id: u8,
    pub bindings: Vec<(Oid, Vec<u8>)>,
}

#[cfg(feature = "alloc")]
impl MessageBuilder {
    pub fn new(auth: AuthLevel, pdu_type: PduType, request_id: u8) -> Self {
        Self {
            auth,
            pdu_type,
            request_id,
            bindings: Vec::new(),
        }
    }

    pub fn var_binding(mut self, oid: Oid, value: &[u8]) -> Self {
        self.bindings.push((oid, value.to_vec()));
        self
    }

    /// Adds a 4 byte binding holding `value`
    pub fn int32(self, appl: u8, group: u8, command: u8, value: i32) -> Self {
        self.var_binding(Oid::int32(appl, group, command), &value.to_le_bytes())
    }

    /// Size of the encoded message
    pub fn encoded_len(&self) -> usize {
        SNMP_FIRST_BINDING_OFFSET
            + self
                .bindings
                .iter()
                .map(|(_, value)| SNMP_OID_LEN + value.len())
                .sum::<usize>()
    }

    /// Encodes into `out`, returning the length of the message
    pub fn write_into(&self, out: &mut [u8]) -> Result<usize, EncodeError> {
        let mut len = init_message_header(self.auth, out)?;
        len += add_pdu_header(self.pdu_type, self.request_id, out)?;
        for (oid, value) in &self.bindings {
            len += add_var_binding(oid, value, out)?;
        }
        Ok(len)
    }

    pub fn into_message_bytes(self) -> Result<Vec<u8>, EncodeError> {
        let mut out = alloc::vec![0u8; self.encoded_len()];
        let len = self.write_into(&mut out)?;
        out.truncate(len);
        Ok(out)
    }
}
