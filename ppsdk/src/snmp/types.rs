use crate::constants::{
    SNMP_COMMUNITY_OFFSET, SNMP_HEADER_LEN, SNMP_LENGTH_OFFSET, SNMP_OID_LEN,
    SNMP_PDU_HEADER_LEN, SNMP_PREAMBLE_1, SNMP_PREAMBLE_2, SNMP_VERSION1, SNMP_VERSION_OFFSET,
};

ssn_table! {
    /// Action requested by a PDU
    pub enum PduType: u8 {
        Set = b'S' => ("set", "Set request"),
        Get = b'G' => ("get", "Get request"),
        Response = b'R' => ("response", "Response"),
    }
}

ssn_table! {
    /// Error status carried by a response PDU
    pub enum ErrorStatus: u8 {
        None = 0 => ("none", "no error"),
        MsgType = 1 => ("msgtype", "message of unknown type received"),
        Oid = 2 => ("oid", "no OID or OID does not exist"),
        SetAction = 3 => ("setaction", "set action not available for this OID"),
        GetAction = 4 => ("getaction", "get action not available for this OID"),
        Size = 5 => ("size", "buffer size not correct for this OID"),
        Value = 6 => ("value", "value not within syntax for this OID"),
        Exe = 7 => ("exe", "could not execute callback for this OID"),
        Auth = 8 => ("auth", "not authorized for this OID"),
        Encrypt = 9 => ("encrypt", "encryption failed"),
        NotReady = 10 => ("notready", "not ready"),
    }
}

ssn_table! {
    /// Authorization level, first byte of the community field. It is set by
    /// the port that generates the command.
    pub enum AuthLevel: u8 {
        Undef = 0 => ("undef", "authorization level not defined"),
        None = 1 => ("none", "no access permitted"),
        Viewer = 2 => ("viewer", "viewing allowed, modification not"),
        User = 3 => ("user", "full access"),
    }
}

/// Message header, mainly used for synchronisation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub version: u8,
    /// XOR of every byte following the header
    pub checksum: u8,
    /// Length of the message, header excluded
    pub length: u16,
    /// Raw first community byte, see [`MessageHeader::auth_level`]
    pub auth: u8,
}

impl MessageHeader {
    pub(crate) fn new(auth: AuthLevel) -> Self {
        Self {
            version: SNMP_VERSION1,
            checksum: 0,
            length: 0,
            auth: auth.raw(),
        }
    }

    pub fn auth_level(&self) -> Option<AuthLevel> {
        AuthLevel::from_raw(self.auth)
    }

    /// Size of the whole message, header included
    pub fn message_len(&self) -> usize {
        SNMP_HEADER_LEN + usize::from(self.length)
    }

    pub(crate) fn write(&self, out: &mut [u8]) {
        out[0] = SNMP_PREAMBLE_1;
        out[1] = SNMP_PREAMBLE_2;
        out[SNMP_VERSION_OFFSET] = self.version;
        out[SNMP_VERSION_OFFSET + 1] = self.checksum;
        out[SNMP_LENGTH_OFFSET..SNMP_LENGTH_OFFSET + 2].copy_from_slice(&self.length.to_le_bytes());
        out[SNMP_COMMUNITY_OFFSET] = self.auth;
        out[SNMP_COMMUNITY_OFFSET + 1] = 0;
    }

    /// Reads the header fields without validating anything but the size
    pub(crate) fn read(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= SNMP_HEADER_LEN);
        Self {
            version: bytes[SNMP_VERSION_OFFSET],
            checksum: bytes[SNMP_VERSION_OFFSET + 1],
            length: u16::from_le_bytes([bytes[SNMP_LENGTH_OFFSET], bytes[SNMP_LENGTH_OFFSET + 1]]),
            auth: bytes[SNMP_COMMUNITY_OFFSET],
        }
    }
}

/// (P)rotocol (D)ata (U)nit header: type of action and room for the reply status
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PduHeader {
    pub pdu_type: PduType,
    /// Sequence number of the request
    pub request_id: u8,
    pub error_status: u8,
    /// Position of the variable binding that caused the error
    pub error_index: u8,
}

impl PduHeader {
    pub fn new(pdu_type: PduType, request_id: u8) -> Self {
        Self {
            pdu_type,
            request_id,
            error_status: ErrorStatus::None.raw(),
            error_index: 0,
        }
    }

    pub fn status(&self) -> Option<ErrorStatus> {
        ErrorStatus::from_raw(self.error_status)
    }

    pub fn to_bytes(&self) -> [u8; SNMP_PDU_HEADER_LEN] {
        [
            self.pdu_type.raw(),
            self.request_id,
            self.error_status,
            self.error_index,
        ]
    }

    pub(crate) fn read(bytes: &[u8; SNMP_PDU_HEADER_LEN]) -> Result<Self, u8> {
        Ok(Self {
            pdu_type: PduType::try_from(bytes[0])?,
            request_id: bytes[1],
            error_status: bytes[2],
            error_index: bytes[3],
        })
    }
}

/// (O)bject (ID)entification of a variable binding: the size of its payload
/// and the location of the configuration item
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Oid {
    /// Size of the payload
    pub size: u8,
    /// Application (eg IO, Navigation)
    pub appl: u8,
    pub group: u8,
    pub command: u8,
    /// Argument, or entry in the case of a table
    pub arg_table_entry: u8,
    /// 0 or table argument
    pub ind_table_arg: u8,
    /// Index in table
    pub table_ind: u8,
    /// Always 0 on messages we build
    pub nil: u8,
}

impl Oid {
    pub const fn new(size: u8, appl: u8, group: u8, command: u8) -> Self {
        Self {
            size,
            appl,
            group,
            command,
            arg_table_entry: 0,
            ind_table_arg: 0,
            table_ind: 0,
            nil: 0,
        }
    }

    /// OID of a 4 byte binding, as used for `FInt32` and `Enum32` items
    pub const fn int32(appl: u8, group: u8, command: u8) -> Self {
        Self::new(4, appl, group, command)
    }

    pub const fn with_table(mut self, arg_table_entry: u8, ind_table_arg: u8, table_ind: u8) -> Self {
        self.arg_table_entry = arg_table_entry;
        self.ind_table_arg = ind_table_arg;
        self.table_ind = table_ind;
        self
    }

    pub fn to_bytes(&self) -> [u8; SNMP_OID_LEN] {
        [
            self.size,
            self.appl,
            self.group,
            self.command,
            self.arg_table_entry,
            self.ind_table_arg,
            self.table_ind,
            0,
        ]
    }

    pub fn from_bytes(bytes: &[u8; SNMP_OID_LEN]) -> Self {
        Self {
            size: bytes[0],
            appl: bytes[1],
            group: bytes[2],
            command: bytes[3],
            arg_table_entry: bytes[4],
            ind_table_arg: bytes[5],
            table_ind: bytes[6],
            nil: bytes[7],
        }
    }
}

/// One OID/value pair read out of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarBinding<'a> {
    pub oid: Oid,
    pub value: &'a [u8],
}

impl VarBinding<'_> {
    /// Interprets a 4 byte payload as a little endian `i32`
    pub fn value_i32(&self) -> Option<i32> {
        let bytes: [u8; 4] = self.value.try_into().ok()?;
        Some(i32::from_le_bytes(bytes))
    }

    /// Size of the binding on the wire
    pub fn encoded_len(&self) -> usize {
        SNMP_OID_LEN + self.value.len()
    }
}
