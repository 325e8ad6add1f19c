//! 探索に使う文字集合の定義

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

// ASCIIの表示可能文字 ('!' ~ '~')
pub const PRINTABLE_FIRST: u8 = 33;
pub const PRINTABLE_LAST: u8 = 126;

pub static PRINTABLE: Lazy<Charset> = Lazy::new(|| Charset {
    chars: (PRINTABLE_FIRST..=PRINTABLE_LAST).collect(),
});

/// 連続した範囲 `[first, last]` から作る文字集合。
///
/// 添字 `i` の文字は `first + i`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<u8>,
}

impl Charset {
    pub fn new(first: u8, last: u8) -> Result<Self> {
        if first > last {
            return Err(Error::InvertedRange { first, last });
        }

        let len = (last - first) as usize + 1;
        let mut chars = Vec::new();
        chars
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { len })?;
        chars.extend(first..=last);

        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn first(&self) -> u8 {
        self.chars[0]
    }

    pub fn last(&self) -> u8 {
        self.chars[self.chars.len() - 1]
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.chars[index]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "charset_len = {} ({:#04x}..={:#04x})",
            self.len(),
            self.first(),
            self.last()
        )?;
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable() {
        assert_eq!(PRINTABLE.len(), 94);
        assert_eq!(PRINTABLE.first(), b'!');
        assert_eq!(PRINTABLE.last(), b'~');
        assert_eq!(*PRINTABLE, Charset::new(33, 126).unwrap());
    }

    #[test]
    fn test_single_symbol() {
        let charset = Charset::new(b'x', b'x').unwrap();
        assert_eq!(charset.len(), 1);
        assert_eq!(charset.as_bytes(), b"x");
    }

    #[test]
    fn test_full_byte_range() {
        let charset = Charset::new(0x00, 0xFF).unwrap();
        assert_eq!(charset.len(), 0x100);
        assert_eq!(charset.get(0xFF), 0xFF);
    }

    #[test]
    fn test_inverted_range() {
        assert_eq!(
            Charset::new(b'z', b'a'),
            Err(Error::InvertedRange {
                first: b'z',
                last: b'a'
            })
        );
    }

    #[test]
    fn test_display() {
        let charset = Charset::new(b'a', b'e').unwrap();
        assert_eq!(charset.to_string(), "charset_len = 5 (0x61..=0x65)\nabcde");
    }
}
