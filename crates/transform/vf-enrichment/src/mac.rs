//! MacAddress - 48-bit MAC address with strict canonical-form validation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAC_MASK: u64 = 0xFFFF_FFFF_FFFF;
const OCTETS: usize = 6;

/// A 48-bit MAC address stored as an integer.
///
/// Ordering follows the integer value, so ranges of addresses can be compared
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress(u64);

/// Error returned when a string is not a canonical MAC address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid MAC address: {0}")]
pub struct ParseMacError(String);

/// Validator state while scanning a candidate MAC string.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Expecting the first hex digit of an octet.
    High,
    /// Expecting the second hex digit of an octet.
    Low,
    /// Expecting one of `:`, `-`, `.` between octets.
    Separator,
    /// All six octets consumed; any further input is rejected.
    Done,
}

impl MacAddress {
    /// Parses a canonical MAC string: six 2-digit hex octets joined by five
    /// separators, each independently one of `:`, `-` or `.`.
    ///
    /// Hex digits are case-insensitive. Mixed separators are accepted.
    /// Surrounding whitespace is not.
    pub fn parse(input: &str) -> Option<Self> {
        let mut value: u64 = 0;
        let mut octets = 0;
        let mut state = State::High;

        for byte in input.bytes() {
            state = match state {
                State::High => {
                    value = (value << 4) | u64::from(hex_value(byte)?);
                    State::Low
                }
                State::Low => {
                    value = (value << 4) | u64::from(hex_value(byte)?);
                    octets += 1;
                    if octets == OCTETS {
                        State::Done
                    } else {
                        State::Separator
                    }
                }
                State::Separator if is_separator(byte) => State::High,
                State::Separator | State::Done => return None,
            };
        }

        matches!(state, State::Done).then_some(Self(value))
    }

    /// Converts a string by removing every `.`, `:` and `-` and reading the
    /// remaining digits as base-16.
    ///
    /// Used for mapping document boundaries, which are not held to the
    /// canonical layout. Returns `None` unless 1 to 12 hex digits remain.
    /// For any input accepted by [`MacAddress::parse`] the result is the same
    /// integer.
    pub fn strip_to_integer(input: &str) -> Option<u64> {
        let mut value: u64 = 0;
        let mut digits = 0;

        for byte in input.bytes().filter(|b| !is_separator(*b)) {
            value = (value << 4) | u64::from(hex_value(byte)?);
            digits += 1;
            if digits > OCTETS * 2 {
                return None;
            }
        }

        (digits > 0).then_some(value)
    }

    /// Creates an address from an integer, keeping the low 48 bits.
    pub fn from_u64(value: u64) -> Self {
        Self(value & MAC_MASK)
    }

    /// Returns the address as an integer.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the six octets, most significant first.
    pub fn octets(self) -> [u8; 6] {
        let bytes = self.0.to_be_bytes();
        [bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]]
    }
}

impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseMacError(s.to_string()))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b':' | b'-' | b'.')
}
