pub const SNMP_PREAMBLE_1: u8 = b'$';
pub const SNMP_PREAMBLE_2: u8 = b'&';
/// Septentrio's first version of the interface
pub const SNMP_VERSION1: u8 = 1;
/// Maximum allowed size for SNMP messages, header included
pub const SNMP_MAX_SIZE: usize = 2048;

pub(crate) const SNMP_PREAMBLE_LEN: usize = 2;
pub(crate) const SNMP_VERSION_OFFSET: usize = 2;
pub(crate) const SNMP_CHECKSUM_OFFSET: usize = 3;
pub(crate) const SNMP_LENGTH_OFFSET: usize = 4;
pub(crate) const SNMP_COMMUNITY_OFFSET: usize = 6;
pub const SNMP_HEADER_LEN: usize = 8;

pub const SNMP_PDU_HEADER_LEN: usize = 4;
pub const SNMP_OID_LEN: usize = 8;

/// Offset of the first variable binding in a message with a PDU header
pub const SNMP_FIRST_BINDING_OFFSET: usize = SNMP_HEADER_LEN + SNMP_PDU_HEADER_LEN;
