//! Seeding a grid from text.

use crate::{
    cells::ALIVE,
    error::Error,
    grid::{cell_total, BitGrid},
};
use educe::Educe;
use sha3::{Digest as _, Sha3_512};
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to turn the input text into the bytes that seed the grid.
///
/// The encoder only ever sees the resulting bytes, so the choice here
/// changes the pattern but never the way it is laid out.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Digest {
    /// `utf8`.
    ///
    /// The UTF-8 bytes of the text itself.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "utf8"))]
    Utf8,

    /// `sha3-512`.
    ///
    /// The SHA3-512 digest of the text, written as 128 lowercase
    /// hexadecimal digits. The seed is the ASCII bytes of those digits.
    #[cfg_attr(feature = "serde", serde(rename = "sha3-512"))]
    Sha3_512,

    /// `sha3-512-raw`.
    ///
    /// The 64 bytes of the SHA3-512 digest of the text.
    #[cfg_attr(feature = "serde", serde(rename = "sha3-512-raw"))]
    Sha3_512Raw,
}

impl Digest {
    /// All digests, in the order they are listed in help messages.
    pub const ALL: [Digest; 3] = [Digest::Utf8, Digest::Sha3_512, Digest::Sha3_512Raw];

    /// The seed bytes for the text.
    pub fn bytes(self, text: &str) -> Cow<'_, [u8]> {
        match self {
            Digest::Utf8 => Cow::Borrowed(text.as_bytes()),
            Digest::Sha3_512 => {
                let hex: String = Sha3_512::digest(text.as_bytes())
                    .iter()
                    .map(|byte| format!("{:02x}", byte))
                    .collect();
                Cow::Owned(hex.into_bytes())
            }
            Digest::Sha3_512Raw => Cow::Owned(Sha3_512::digest(text.as_bytes()).to_vec()),
        }
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "utf8" | "utf-8" => Ok(Digest::Utf8),
            "sha3-512" => Ok(Digest::Sha3_512),
            "sha3-512-raw" => Ok(Digest::Sha3_512Raw),
            _ => Err(Error::ParseDigestError(s.to_owned())),
        }
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Digest::Utf8 => "utf8",
            Digest::Sha3_512 => "sha3-512",
            Digest::Sha3_512Raw => "sha3-512-raw",
        };
        f.write_str(s)
    }
}

/// Lays bytes out on a grid, one bit per cell.
///
/// Byte `i` covers cells `8 * i .. 8 * i + 8` in row-major order,
/// most significant bit first. Only the first [`capacity`](Self::capacity)
/// bytes are read; missing bytes count as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoder {
    size: usize,

    /// Number of bytes read.
    capacity: usize,
}

impl Encoder {
    /// Creates an encoder for grids of the given size.
    pub fn new(size: usize) -> Result<Self, Error> {
        let cells = cell_total(size)?;
        let capacity = cells / 8 + usize::from(cells % 8 != 0);
        Ok(Encoder { size, capacity })
    }

    /// Side length of the produced grids.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of bytes needed to cover every cell, i.e., `ceil(size² / 8)`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Seeds a grid from raw bytes.
    pub fn encode_bytes(&self, bytes: &[u8]) -> BitGrid {
        let mut grid = BitGrid::dead(self.size);
        for (i, &byte) in bytes.iter().take(self.capacity()).enumerate() {
            for j in 0..8 {
                if (byte >> (7 - j)) & 1 == 0 {
                    continue;
                }
                let index = i * 8 + j;
                let (x, y) = (index % self.size, index / self.size);
                // The last byte may reach past the last row.
                if y >= self.size {
                    break;
                }
                grid.cells[y * self.size + x] = ALIVE;
            }
        }
        grid
    }

    /// Seeds a grid from text, after passing it through the digest.
    pub fn encode(&self, text: &str, digest: Digest) -> BitGrid {
        self.encode_bytes(&digest.bytes(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity() -> Result<(), Error> {
        assert_eq!(Encoder::new(32)?.capacity(), 128);
        assert_eq!(Encoder::new(5)?.capacity(), 4);
        assert_eq!(Encoder::new(1)?.capacity(), 1);
        assert_eq!(Encoder::new(0), Err(Error::NonPositiveError));
        Ok(())
    }

    #[test]
    fn overflow_bits_are_dropped() -> Result<(), Error> {
        // 25 cells, 4 bytes: the last 7 bits of the last byte have no cell.
        let grid = Encoder::new(5)?.encode_bytes(&[0xff; 8]);
        assert_eq!(grid.cell_count(), 25);
        let grid = Encoder::new(5)?.encode_bytes(&[0, 0, 0, 0x7f]);
        assert_eq!(grid.cell_count(), 0);
        Ok(())
    }

    #[test]
    fn multibyte_text() -> Result<(), Error> {
        // "é" is 0xc3 0xa9 in UTF-8.
        let grid = Encoder::new(4)?.encode("é", Digest::Utf8);
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![true, true, false, false],
                vec![false, false, true, true],
                vec![true, false, true, false],
                vec![true, false, false, true],
            ]
        );
        Ok(())
    }

    #[test]
    fn digests() {
        assert_eq!(Digest::Utf8.bytes("PF 2025").as_ref(), b"PF 2025");
        let hex = Digest::Sha3_512.bytes("");
        assert_eq!(hex.len(), 128);
        assert!(hex.starts_with(b"a69f73cca23a9ac5"));
        assert!(hex.iter().all(|b| b.is_ascii_hexdigit()));
        let raw = Digest::Sha3_512Raw.bytes("");
        assert_eq!(raw.len(), 64);
        assert_eq!(raw[..4], [0xa6, 0x9f, 0x73, 0xcc]);
    }

    #[test]
    fn parse_digest() {
        for digest in Digest::ALL {
            assert_eq!(digest.to_string().parse(), Ok(digest));
        }
        assert_eq!(
            "md5".parse::<Digest>(),
            Err(Error::ParseDigestError(String::from("md5")))
        );
    }
}
