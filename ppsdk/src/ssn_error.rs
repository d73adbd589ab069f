//! Status values returned by every SDK operation.
//!
//! A status value is a 32 bit integer laid out much like a Win32 `HRESULT`:
//!
//! ```text
//!  3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 1 1 1 1 1 1
//!  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
//! +-+-----------------------------+---------------+-+-------------+
//! |S|            Module           |   Submodule   |G|    Code     |
//! +-+-----------------------------+---------------+-+-------------+
//! ```
//!
//! A value with the severity bit cleared is a success. It is an
//! unconditional success when the whole value is zero and a warning
//! otherwise.

use core::fmt;

mod tables;

pub use tables::{Code, ErrorType, Module, Severity, Submodule};

const SEVERITY_SHIFT: u32 = 31;
const MODULE_SHIFT: u32 = 16;
const MODULE_MASK: u32 = 0x7fff;
const SUBMODULE_SHIFT: u32 = 8;
const SUBMODULE_MASK: u32 = 0xff;
const TYPE_SHIFT: u32 = 7;
const CODE_MASK: u32 = 0x7f;

const FAILURE_THRESHOLD: u32 = 0x8000_0000;

/// Packed SDK status value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ErrorCode(u32);

impl ErrorCode {
    /// Unconditional success
    pub const OK: ErrorCode = ErrorCode(0);

    /// Packs the fields into a status value.
    ///
    /// The fields are not range checked: a `module` wider than 15 bits or a
    /// `code` wider than 7 bits bleeds into the neighbouring fields. Debug
    /// builds assert the field widths instead.
    pub const fn create(
        severity: Severity,
        module: u16,
        submodule: u8,
        error_type: ErrorType,
        code: u8,
    ) -> Self {
        debug_assert!(module as u32 <= MODULE_MASK, "module exceeds 15 bits");
        debug_assert!(code as u32 <= CODE_MASK, "code exceeds 7 bits");
        ErrorCode(
            ((severity as u32) << SEVERITY_SHIFT)
                | ((module as u32) << MODULE_SHIFT)
                | ((submodule as u32) << SUBMODULE_SHIFT)
                | ((error_type as u32) << TYPE_SHIFT)
                | code as u32,
        )
    }

    /// Failure raised by `module`/`submodule`, using the shared code table
    pub const fn failure(module: Module, submodule: Submodule, code: Code) -> Self {
        Self::create(
            Severity::Failure,
            module as u16,
            submodule as u8,
            ErrorType::General,
            code as u8,
        )
    }

    /// Success (or warning, for a non zero `code`) reported by `module`/`submodule`
    pub const fn success(module: Module, submodule: Submodule, code: Code) -> Self {
        Self::create(
            Severity::Success,
            module as u16,
            submodule as u8,
            ErrorType::General,
            code as u8,
        )
    }

    pub const fn from_raw(value: u32) -> Self {
        ErrorCode(value)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn severity(self) -> Severity {
        if (self.0 >> SEVERITY_SHIFT) & 1 == 0 {
            Severity::Success
        } else {
            Severity::Failure
        }
    }

    /// Raw 15 bit module field
    pub const fn module(self) -> u16 {
        ((self.0 >> MODULE_SHIFT) & MODULE_MASK) as u16
    }

    pub const fn submodule(self) -> u8 {
        ((self.0 >> SUBMODULE_SHIFT) & SUBMODULE_MASK) as u8
    }

    pub const fn error_type(self) -> ErrorType {
        if (self.0 >> TYPE_SHIFT) & 1 == 0 {
            ErrorType::Private
        } else {
            ErrorType::General
        }
    }

    /// Raw 7 bit code field
    pub const fn code(self) -> u8 {
        (self.0 & CODE_MASK) as u8
    }

    /// `true` for a success or a warning
    pub const fn status(self) -> bool {
        self.0 < FAILURE_THRESHOLD
    }

    /// `true` when the operation succeeded with a caveat. Zero is an
    /// unconditional success and never a warning.
    pub const fn is_warning(self) -> bool {
        self.status() && self.0 != 0
    }

    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    pub const fn known_module(self) -> Option<Module> {
        Module::from_raw(self.module())
    }

    pub const fn known_submodule(self) -> Option<Submodule> {
        Submodule::from_raw(self.submodule())
    }

    pub const fn known_code(self) -> Option<Code> {
        Code::from_raw(self.code())
    }

    /// Description of the condition, `"unknown"` outside of the code table
    pub const fn message(self) -> &'static str {
        match self.known_code() {
            Some(code) => code.description(),
            None => "unknown",
        }
    }

    pub const fn module_name(self) -> &'static str {
        match self.known_module() {
            Some(module) => module.description(),
            None => "unknown",
        }
    }

    pub const fn submodule_name(self) -> &'static str {
        match self.known_submodule() {
            Some(submodule) => submodule.description(),
            None => "unknown",
        }
    }

    /// Converts into a `Result`, keeping warnings on the success side
    pub const fn into_result(self) -> Result<ErrorCode, ErrorCode> {
        if self.status() {
            Ok(self)
        } else {
            Err(self)
        }
    }
}

impl From<u32> for ErrorCode {
    fn from(value: u32) -> Self {
        ErrorCode(value)
    }
}

impl From<ErrorCode> for u32 {
    fn from(value: ErrorCode) -> Self {
        value.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match (self.severity(), self.is_warning()) {
            (Severity::Failure, _) => "Failure",
            (Severity::Success, true) => "Warning",
            (Severity::Success, false) => "Success",
        };
        write!(f, "{} in ", outcome)?;
        match self.known_module() {
            Some(module) => write!(f, "{}", module)?,
            None => write!(f, "unknown ({})", self.module())?,
        }
        f.write_str("/")?;
        match self.known_submodule() {
            Some(submodule) => write!(f, "{}", submodule)?,
            None => write!(f, "unknown ({})", self.submodule())?,
        }
        f.write_str(": ")?;
        match self.known_code() {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "unknown ({})", self.code()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ErrorCode {}
