//! Bech32 account addresses (BIP-173)
//!
//! Decoding rules:
//! - Total length 8..=1023 (the account-address limit, above BIP-173's 90),
//!   all lowercase or all uppercase
//! - Separator is the last '1'; the prefix is non-empty printable ASCII
//! - Data part uses the bech32 charset and ends in a 6 character checksum
//! - 5-bit groups regroup to bytes with zero padding of at most 4 bits
//! - Payload is 1..=255 bytes

use std::fmt;

use super::errors::{AddressError, AddressResult};

/// Human-readable prefix of account addresses on this chain
pub const ACCOUNT_PREFIX: &str = "nolus";

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];
const CHECKSUM_LEN: usize = 6;
const MIN_LEN: usize = 8;
const MAX_LEN: usize = 1023;
const MAX_PAYLOAD_LEN: usize = 255;

/// Decoded account address bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    /// Wraps raw address bytes, enforcing the payload length bounds.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> AddressResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() || bytes.len() > MAX_PAYLOAD_LEN {
            return Err(AddressError::InvalidPayloadLength(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// Parses an address carrying the chain's account prefix.
    pub fn from_bech32(address: &str) -> AddressResult<Self> {
        Self::from_bech32_with_prefix(address, ACCOUNT_PREFIX)
    }

    /// Parses an address that must carry `prefix`.
    pub fn from_bech32_with_prefix(address: &str, prefix: &str) -> AddressResult<Self> {
        if address.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let (hrp, data) = decode(address)?;
        if hrp != prefix {
            return Err(AddressError::WrongPrefix {
                expected: prefix.to_string(),
                got: hrp,
            });
        }

        Self::from_bytes(from_base32(&data)?)
    }

    /// Returns the raw address bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encodes the address under `prefix`.
    pub fn to_bech32(&self, prefix: &str) -> String {
        let data = to_base32(&self.0);
        let checksum = create_checksum(prefix, &data);

        let mut out = String::with_capacity(prefix.len() + 1 + data.len() + CHECKSUM_LEN);
        out.push_str(prefix);
        out.push('1');
        for &v in data.iter().chain(checksum.iter()) {
            out.push(CHARSET[usize::from(v)] as char);
        }
        out
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bech32(ACCOUNT_PREFIX))
    }
}

/// Splits a bech32 string into its prefix and 5-bit data (checksum stripped).
fn decode(s: &str) -> AddressResult<(String, Vec<u8>)> {
    if s.len() < MIN_LEN || s.len() > MAX_LEN {
        return Err(AddressError::InvalidLength(s.len()));
    }

    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }

    let s = s.to_ascii_lowercase();
    let sep = s.rfind('1').ok_or(AddressError::MissingSeparator)?;
    if sep == 0 {
        return Err(AddressError::MissingSeparator);
    }
    if sep + 1 + CHECKSUM_LEN > s.len() {
        return Err(AddressError::InvalidLength(s.len()));
    }

    let (hrp, rest) = (&s[..sep], &s[sep + 1..]);
    if let Some(c) = hrp.chars().find(|&c| !(33..=126).contains(&u32::from(c))) {
        return Err(AddressError::InvalidChar(c));
    }

    let data = rest
        .chars()
        .map(|c| {
            CHARSET
                .iter()
                .position(|&b| char::from(b) == c)
                .map(|p| p as u8)
                .ok_or(AddressError::InvalidChar(c))
        })
        .collect::<AddressResult<Vec<u8>>>()?;

    let mut values = hrp_expand(hrp);
    values.extend_from_slice(&data);
    if polymod(&values) != 1 {
        return Err(AddressError::InvalidChecksum);
    }

    let payload_len = data.len() - CHECKSUM_LEN;
    Ok((hrp.to_string(), data[..payload_len].to_vec()))
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(v);
        for (i, g) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LEN]);
    let pm = polymod(&values) ^ 1;

    let mut out = [0u8; CHECKSUM_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = ((pm >> (5 * (5 - i))) & 0x1f) as u8;
    }
    out
}

fn to_base32(bytes: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(bytes.len() * 8 / 5 + 1);
    for &b in bytes {
        acc = ((acc << 8) | u32::from(b)) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

fn from_base32(data: &[u8]) -> AddressResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * 5 / 8);
    for &v in data {
        acc = ((acc << 5) | u32::from(v)) & 0xfff;
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || ((acc << (8 - bits)) & 0xff) != 0 {
        return Err(AddressError::InvalidPadding);
    }
    Ok(out)
}
