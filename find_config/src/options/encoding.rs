//! Encoding and open-mode settings consumed by [`crate::read_text`].
//!
//! Both types parse from the short spellings common in configuration files
//! (`"utf8"`, `"latin1"`, `"r"`, `"r+"`) and can be deserialised with serde.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::str::FromStr;

use serde::Deserialize;

use crate::FindError;

/// Text encoding used when decoding a resolved configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TextEncoding {
    /// Strict UTF-8; invalid sequences are reported as errors.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
    /// ISO-8859-1, mapping each byte to the code point of the same value.
    Latin1,
    /// 7-bit ASCII; bytes above `0x7F` are reported as errors.
    ///
    /// This is stricter than Node's `ascii` decoding, which never fails. Use
    /// [`TextEncoding::Latin1`] to accept every byte.
    Ascii,
}

impl TextEncoding {
    /// Decodes `bytes` according to this encoding.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidData`] when the bytes are not valid
    /// for a strict encoding.
    pub fn decode(self, bytes: Vec<u8>) -> io::Result<String> {
        match self {
            Self::Utf8 => {
                String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            }
            Self::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Self::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            Self::Ascii => {
                if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("non-ASCII byte at offset {pos}"),
                    ));
                }
                Ok(bytes.into_iter().map(char::from).collect())
            }
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf8Lossy => "utf8-lossy",
            Self::Latin1 => "latin1",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextEncoding {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf8-lossy" | "utf-8-lossy" => Ok(Self::Utf8Lossy),
            "latin1" | "latin-1" | "iso-8859-1" | "binary" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            _ => Err(FindError::InvalidOption {
                option: "file_encoding",
                value: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = FindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Mode used to open a resolved configuration file before reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OpenFlag {
    /// Open for reading only (`"r"`).
    #[default]
    Read,
    /// Open for reading and writing (`"r+"`); fails on read-only files.
    ReadWrite,
}

impl OpenFlag {
    /// Returns the [`OpenOptions`] matching this flag. Files are never
    /// created or truncated.
    #[must_use]
    pub fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(true);
        if self == Self::ReadWrite {
            options.write(true);
        }
        options
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "r",
            Self::ReadWrite => "r+",
        }
    }
}

impl fmt::Display for OpenFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenFlag {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "r" | "rs" => Ok(Self::Read),
            "r+" | "rs+" => Ok(Self::ReadWrite),
            _ => Err(FindError::InvalidOption {
                option: "open_flag",
                value: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for OpenFlag {
    type Error = FindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
