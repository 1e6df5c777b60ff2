//! Component and interface identifiers.

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::Status;

/// A 128-bit class identifier, written `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cid(u128);

impl Cid {
    /// Builds a CID from its conventional four groups.
    pub const fn from_parts(m0: u32, m1: u16, m2: u16, m3: [u8; 8]) -> Self {
        let mut v = ((m0 as u128) << 96) | ((m1 as u128) << 80) | ((m2 as u128) << 64);
        let mut i = 0;
        while i < 8 {
            v |= (m3[i] as u128) << (56 - 8 * i);
            i += 1;
        }
        Self(v)
    }

    /// Builds a CID from its raw 128-bit value.
    pub const fn from_u128(v: u128) -> Self {
        Self(v)
    }

    /// The raw 128-bit value.
    pub const fn as_u128(self) -> u128 {
        self.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{{{:08x}-{:04x}-{:04x}-{:04x}-{:012x}}}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff,
        )
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cid({self})")
    }
}

impl FromStr for Cid {
    type Err = Status;

    /// Accepts the hyphenated form with or without surrounding braces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = match s.strip_prefix('{') {
            Some(rest) => rest.strip_suffix('}').ok_or(Status::InvalidCid)?,
            None => s,
        };

        const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
        let mut v: u128 = 0;
        let mut count = 0;
        for (group, want) in body.split('-').zip(GROUPS) {
            if group.len() != want || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Status::InvalidCid);
            }
            let bits = u64::from_str_radix(group, 16).map_err(|_| Status::InvalidCid)?;
            v = (v << (4 * want)) | u128::from(bits);
            count += 1;
        }
        if count != GROUPS.len() || body.split('-').count() != GROUPS.len() {
            return Err(Status::InvalidCid);
        }
        Ok(Self(v))
    }
}

impl Serialize for Cid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Names an interface a component can be asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId(&'static str);

impl InterfaceId {
    /// Declares an interface by name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The interface name.
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The base interface every component answers to.
pub const ISUPPORTS: InterfaceId = InterfaceId::new("nsISupports");

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Cid = Cid::from_parts(
        0x2d96b3d0,
        0xc051,
        0x11d1,
        [0xa8, 0x27, 0x00, 0x40, 0x95, 0x9a, 0x28, 0xc9],
    );

    #[test]
    fn test_display_uses_braced_groups() {
        assert_eq!(SAMPLE.to_string(), "{2d96b3d0-c051-11d1-a827-0040959a28c9}");
    }

    #[test]
    fn test_parse_accepts_display_output() {
        let parsed: Cid = "{2d96b3d0-c051-11d1-a827-0040959a28c9}".parse().unwrap();
        assert_eq!(parsed, SAMPLE);
        let bare: Cid = "2D96B3D0-C051-11D1-A827-0040959A28C9".parse().unwrap();
        assert_eq!(bare, SAMPLE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "{}",
            "{2d96b3d0-c051-11d1-a827-0040959a28c9",
            "2d96b3d0-c051-11d1-a827",
            "2d96b3d0-c051-11d1-a827-0040959a28c9-00",
            "2d96b3d0-c05-111d1-a827-0040959a28c9",
            "2d96b3dg-c051-11d1-a827-0040959a28c9",
        ] {
            assert_eq!(bad.parse::<Cid>(), Err(Status::InvalidCid), "{bad}");
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&SAMPLE).unwrap();
        assert_eq!(json, "\"{2d96b3d0-c051-11d1-a827-0040959a28c9}\"");
        let back: Cid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SAMPLE);
        assert!(serde_json::from_str::<Cid>("\"nope\"").is_err());
    }
}
