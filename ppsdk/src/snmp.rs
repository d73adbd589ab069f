//! Pseudo-SNMP messages used to configure and query the receiver and the
//! post processing engine.
//!
//! These messages follow the build-up of SNMP but are proprietary, and
//! multi-byte fields use the native (little endian) byte order of the
//! receivers.
//!
//! ```text
//! +----------+-------+--------+--------+-----------+
//! | Preamble |Version|Checksum| Length | Community |
//! |  '$' '&' |   1   |  XOR   |  u16   | auth, 0   |
//! +----------+-------+--------+--------+-----------+
//! +------+-------+------+-----+ +-------+-------------+-------+---
//! | PDU  |Request|Error |Error| |OID,   |OID,         |OID,   |...
//! | type |  ID   |Status|Index| |payload|p a y l o a d|payload|...
//! +------+-------+------+-----+ +-------+-------------+-------+---
//! ```
//!
//! The checksum is the XOR of every byte after the 8 byte message header and
//! the length counts those same bytes.

mod checksum;
mod client;
mod message;
mod types;

pub use checksum::xor_checksum;
pub use client::{
    add_pdu_header, add_var_binding, add_var_binding_safe, get_message_header, get_pdu_header,
    get_var_binding, init_message_header,
};
#[cfg(feature = "alloc")]
pub use message::MessageBuilder;
pub use message::{MessageRef, VarBindingIter};
pub use types::{AuthLevel, ErrorStatus, MessageHeader, Oid, PduHeader, PduType, VarBinding};
