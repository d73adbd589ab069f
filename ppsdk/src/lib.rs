//! # ppsdk
//!
//! Pure-rust implementation of two building blocks of the Septentrio
//! post-processing SDK: the packed 32-bit status codes returned by every SDK
//! call, and the SNMP-like binary messages used to configure and query the
//! receiver and the post processing engine.
//!
//! Status codes
//! ============
//!
//! ```
//! use ppsdk::{Code, ErrorCode, Module, Submodule};
//!
//! let err = ErrorCode::failure(Module::SsnSnmp, Submodule::SsnSnmp, Code::InvalidSnmpCmd);
//! assert!(!err.status());
//! assert_eq!(err.known_module(), Some(Module::SsnSnmp));
//! assert_eq!(ErrorCode::from_raw(0).is_warning(), false);
//! ```
//!
//! Building messages
//! =================
//!
//! Messages are built in place, in a caller owned buffer. After every step
//! the buffer holds a complete message with its length and checksum up to
//! date:
//! ```
//! use ppsdk::snmp::{self, AuthLevel, Oid, PduType};
//!
//! let mut buf = [0u8; 64];
//! let mut len = snmp::init_message_header(AuthLevel::Viewer, &mut buf).unwrap();
//! len += snmp::add_pdu_header(PduType::Set, 1, &mut buf).unwrap();
//! len += snmp::add_var_binding(&Oid::int32(3, 1, 5), &10i32.to_le_bytes(), &mut buf).unwrap();
//! assert_eq!(len, 24);
//! ```
//!
//! Parsing messages
//! ================
//!
//! Messages read from a stream are framed by a `Parser`. The parser contains
//! an internal buffer of data, and when `consume()` is called that data is
//! copied into the internal buffer and an iterator-like object is returned to
//! access the messages. For example:
//! ```
//! # #[cfg(feature = "alloc")] {
//! use ppsdk::Parser;
//!
//! let mut parser = Parser::default();
//! let my_raw_data = vec![1, 2, 3, 4]; // From your serial port
//! let mut it = parser.consume(&my_raw_data);
//! loop {
//!     match it.next() {
//!         Some(Ok(message)) => {
//!             // We've received a MessageRef, we can walk its bindings
//!             for binding in message.var_bindings() {
//!                 let _ = binding.value;
//!             }
//!         }
//!         Some(Err(_)) => {
//!             // Received a malformed message
//!         }
//!         None => {
//!             // The internal buffer is now empty
//!             break;
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! no_std Support
//! ==============
//!
//! Everything but `MessageBuilder` and the `Vec` backed parser works without
//! an allocator. The parser then runs over a `FixedLinearBuffer`:
//! ```
//! let mut buf = [0; 2048];
//! let buf = ppsdk::FixedLinearBuffer::new(&mut buf[..]);
//! let mut parser = ppsdk::Parser::new(buf);
//! ```
//! A buffer of 2048 bytes holds the largest message the protocol allows.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
extern crate core;
#[cfg(feature = "serde")]
extern crate serde;

#[macro_use]
mod macros;

pub mod constants;
mod error;
mod parser;
pub mod snmp;
pub mod ssn_error;

pub use crate::{
    error::{EncodeError, ParserError},
    parser::{FixedLinearBuffer, Parser, ParserIter, UnderlyingBuffer},
    snmp::MessageRef,
    ssn_error::{Code, ErrorCode, ErrorType, Module, Severity, Submodule},
};
