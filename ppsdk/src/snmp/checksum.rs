use crate::{
    constants::{SNMP_CHECKSUM_OFFSET, SNMP_HEADER_LEN},
    ParserError,
};

/// Modulo 2 (XOR) checksum over everything following the message header
#[derive(Default, Clone, Copy)]
pub(crate) struct SnmpChecksumCalc {
    ck: u8,
}

impl SnmpChecksumCalc {
    pub(crate) const fn new() -> Self {
        Self { ck: 0 }
    }

    /// Starts from a previously computed checksum, to extend it
    pub(crate) const fn resume(ck: u8) -> Self {
        Self { ck }
    }

    pub(crate) const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.ck ^= bytes[i];
            i += 1;
        }
    }

    pub(crate) const fn result(self) -> u8 {
        self.ck
    }

    pub(crate) const fn validate_result(self, received: u8) -> Result<(), ParserError> {
        if self.ck == received {
            Ok(())
        } else {
            Err(ParserError::InvalidChecksum {
                expect: received,
                got: self.ck,
            })
        }
    }

    /// Single-shot validation of a complete message, `message` must hold
    /// exactly the header and the payload it announces
    pub(crate) fn validate_message(message: &[u8]) -> Result<(), ParserError> {
        let mut calc = Self::new();
        calc.update(&message[SNMP_HEADER_LEN..]);
        calc.validate_result(message[SNMP_CHECKSUM_OFFSET])
    }
}

/// XOR of every byte in `bytes`
pub const fn xor_checksum(bytes: &[u8]) -> u8 {
    let mut calc = SnmpChecksumCalc::new();
    calc.update(bytes);
    calc.result()
}
