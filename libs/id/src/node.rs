//! Node identifier type.
//!
//! A node identifier wraps a 128-bit universal identifier and names a node
//! for the node's entire lifetime, independent of where the node sits in the
//! hierarchy. Once created an identifier is immutable.
//!
//! ## Canonical form
//!
//! The textual form is the standard 36-character hyphenated rendering of a
//! 128-bit value (8-4-4-4-12 hex digits):
//!
//! ```text
//! f81d4fae-7dec-11d0-a765-00a0c91e6bf6
//! ```
//!
//! The binary form is exactly 16 bytes, big-endian, most-significant 64-bit
//! word first.

use uuid::Uuid;

use crate::IdError;

/// Length in bytes of the binary encoding.
pub const ENCODED_LEN: usize = 16;

/// Length in characters of the canonical hyphenated literal.
pub const CANONICAL_LEN: usize = 36;

/// Offsets of the group separators in the canonical literal.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Identifies a node by its 128-bit universal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Creates a node identifier from a universal identifier value.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates a node identifier from its two 64-bit words,
    /// most-significant word first.
    #[must_use]
    pub const fn from_bits(msb: u64, lsb: u64) -> Self {
        Self(Uuid::from_u64_pair(msb, lsb))
    }

    /// Creates a node identifier from its 16-byte big-endian encoding.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Creates a node identifier from a byte slice.
    ///
    /// The slice must be exactly 16 bytes: the big-endian packing of the
    /// most-significant word followed by the least-significant word.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdError> {
        let bytes: [u8; ENCODED_LEN] =
            bytes.try_into().map_err(|_| IdError::InvalidLength {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Parses a node identifier from its canonical literal.
    ///
    /// Only the hyphenated 8-4-4-4-12 form produced by [`Display`] is
    /// accepted; hex digits may be upper- or lowercase. Braced, URN, and
    /// compact 32-character renderings are rejected. Every textual entry
    /// point of this crate (`FromStr`, serde deserialization, item literal
    /// parsing) routes through this function.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let uuid = parse_canonical(s)?;
        Ok(Self(uuid))
    }

    /// Returns the wrapped universal identifier value.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns a fresh 16-byte big-endian encoding of the identifier,
    /// most-significant word first.
    ///
    /// The caller owns the returned array; mutating it cannot affect the
    /// identifier.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        self.0.into_bytes()
    }

    /// Returns the most significant 64 bits of the identifier.
    #[must_use]
    pub const fn most_significant_bits(&self) -> u64 {
        self.0.as_u64_pair().0
    }

    /// Returns the least significant 64 bits of the identifier.
    #[must_use]
    pub const fn least_significant_bits(&self) -> u64 {
        self.0.as_u64_pair().1
    }
}

/// Validates the canonical hyphenated shape, then decodes.
fn parse_canonical(s: &str) -> Result<Uuid, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }

    let bytes = s.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return Err(invalid_literal(s, "expected 36 characters in 8-4-4-4-12 form"));
    }

    for (i, &b) in bytes.iter().enumerate() {
        if HYPHEN_OFFSETS.contains(&i) {
            if b != b'-' {
                return Err(invalid_literal(s, "expected '-' between hex groups"));
            }
        } else if !b.is_ascii_hexdigit() {
            return Err(invalid_literal(s, "expected a hex digit"));
        }
    }

    Uuid::try_parse(s).map_err(|e| invalid_literal(s, &e.to_string()))
}

fn invalid_literal(literal: &str, reason: &str) -> IdError {
    IdError::InvalidLiteral {
        literal: literal.to_string(),
        reason: reason.to_string(),
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for NodeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<NodeId> for Uuid {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl AsRef<Uuid> for NodeId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl serde::Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;

    use super::*;

    const SAMPLE: &str = "f81d4fae-7dec-11d0-a765-00a0c91e6bf6";

    fn hash_of(id: NodeId) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_parse_canonical_literal() {
        let id = NodeId::parse(SAMPLE).unwrap();
        assert_eq!(id.to_string(), SAMPLE);
        assert_eq!(id.most_significant_bits(), 0xf81d4fae7dec11d0);
        assert_eq!(id.least_significant_bits(), 0xa76500a0c91e6bf6);
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        let id = NodeId::parse(&SAMPLE.to_uppercase()).unwrap();
        assert_eq!(id, NodeId::parse(SAMPLE).unwrap());
        // Rendering is always lowercase.
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(NodeId::parse(""), Err(IdError::Empty));
        assert!(NodeId::parse("").unwrap_err().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_literals() {
        let truncated = &SAMPLE[..SAMPLE.len() - 1];
        let compact = SAMPLE.replace('-', "");
        let braced = format!("{{{SAMPLE}}}");
        let misplaced_hyphen = "f81d4fae7-dec-11d0-a765-00a0c91e6bf6";
        let non_hex = "g81d4fae-7dec-11d0-a765-00a0c91e6bf6";

        for literal in [
            "not-a-uuid",
            truncated,
            compact.as_str(),
            braced.as_str(),
            misplaced_hyphen,
            non_hex,
        ] {
            let result = NodeId::parse(literal);
            assert!(
                matches!(result, Err(IdError::InvalidLiteral { .. })),
                "expected rejection of {literal:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_from_str_agrees_with_parse() {
        let parsed: NodeId = SAMPLE.parse().unwrap();
        assert_eq!(parsed, NodeId::parse(SAMPLE).unwrap());
        assert!("not-a-uuid".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_from_bits_byte_layout() {
        let id = NodeId::from_bits(0x0102030405060708, 0x090a0b0c0d0e0f10);
        assert_eq!(
            id.to_bytes(),
            [
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, //
                0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
            ]
        );
    }

    #[test]
    fn test_from_slice_roundtrip() {
        let id = NodeId::parse(SAMPLE).unwrap();
        assert_eq!(NodeId::from_slice(&id.to_bytes()), Ok(id));
    }

    #[test]
    fn test_from_slice_wrong_length() {
        assert_eq!(
            NodeId::from_slice(&[0u8; 15]),
            Err(IdError::InvalidLength {
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            NodeId::from_slice(&[]),
            Err(IdError::InvalidLength {
                expected: 16,
                actual: 0
            })
        );
    }

    #[test]
    fn test_equal_ids_hash_identically() {
        let a = NodeId::parse(SAMPLE).unwrap();
        let b = NodeId::from_bits(a.most_significant_bits(), a.least_significant_bits());
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }

    #[test]
    fn test_order_is_numeric() {
        let low = NodeId::from_bits(0, 1);
        let mid = NodeId::from_bits(1, 0);
        let high = NodeId::from_bits(u64::MAX, 0);

        assert!(low < mid);
        assert!(mid < high);
        assert!(low < high);

        let mut ids = vec![high, low, mid];
        ids.sort();
        assert_eq!(ids, vec![low, mid, high]);
    }

    #[test]
    fn test_cmp_equal_iff_eq() {
        let a = NodeId::from_bits(7, 7);
        let b = NodeId::from_bits(7, 7);
        let c = NodeId::from_bits(7, 8);

        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
        assert_ne!(a.cmp(&c), std::cmp::Ordering::Equal);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_json_roundtrip() {
        let id = NodeId::parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let parsed: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_malformed() {
        assert!(serde_json::from_str::<NodeId>("\"not-a-uuid\"").is_err());
        assert!(serde_json::from_str::<NodeId>("\"\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_string_roundtrip(msb in any::<u64>(), lsb in any::<u64>()) {
            let id = NodeId::from_bits(msb, lsb);
            prop_assert_eq!(NodeId::parse(&id.to_string()).unwrap(), id);
        }

        #[test]
        fn prop_byte_roundtrip(msb in any::<u64>(), lsb in any::<u64>()) {
            let id = NodeId::from_bits(msb, lsb);
            prop_assert_eq!(NodeId::from_bytes(id.to_bytes()), id);
            prop_assert_eq!(NodeId::from_slice(&id.to_bytes()).unwrap(), id);
        }

        #[test]
        fn prop_order_matches_word_pairs(
            a_msb in any::<u64>(), a_lsb in any::<u64>(),
            b_msb in any::<u64>(), b_lsb in any::<u64>(),
        ) {
            let a = NodeId::from_bits(a_msb, a_lsb);
            let b = NodeId::from_bits(b_msb, b_lsb);
            prop_assert_eq!(a.cmp(&b), (a_msb, a_lsb).cmp(&(b_msb, b_lsb)));
        }
    }
}
