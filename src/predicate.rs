//! 候補が解かどうかを判定する述語

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// 候補の受理判定。
///
/// 渡されるスライスの長さがそのまま候補の長さ。同じ入力には同じ結果を返すこと。
pub trait Predicate {
    fn accept(&mut self, candidate: &[u8]) -> bool;
}

impl<F> Predicate for F
where
    F: FnMut(&[u8]) -> bool,
{
    fn accept(&mut self, candidate: &[u8]) -> bool {
        self(candidate)
    }
}

/// 指定した文字列と完全一致する候補を受理
#[derive(Debug, Clone)]
pub struct Exact {
    target: Vec<u8>,
}

impl Exact {
    pub fn new(target: impl Into<Vec<u8>>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Predicate for Exact {
    fn accept(&mut self, candidate: &[u8]) -> bool {
        candidate == self.target.as_slice()
    }
}

/// SHA-256 のダイジェストが一致する候補を受理
#[derive(Debug, Clone)]
pub struct Sha256Digest {
    expected: [u8; 32],
}

impl Sha256Digest {
    pub fn from_hex(digest: &str) -> Result<Self> {
        let mut expected = [0u8; 32];
        hex::decode_to_slice(digest.trim(), &mut expected)
            .map_err(|e| Error::InvalidDigest(format!("{}: {}", digest, e)))?;
        Ok(Self { expected })
    }
}

impl Predicate for Sha256Digest {
    fn accept(&mut self, candidate: &[u8]) -> bool {
        let actual = Sha256::digest(candidate);
        actual.as_slice() == &self.expected[..]
    }
}

/// コマンドラインから選べる述語
#[derive(Debug, Clone)]
pub enum Builtin {
    Exact(Exact),
    Sha256(Sha256Digest),
}

impl Predicate for Builtin {
    fn accept(&mut self, candidate: &[u8]) -> bool {
        match self {
            Builtin::Exact(p) => p.accept(candidate),
            Builtin::Sha256(p) => p.accept(candidate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let mut p = Exact::new("Ha!");
        assert!(p.accept(b"Ha!"));
        assert!(!p.accept(b"Ha"));
        assert!(!p.accept(b"Ha!!"));
    }

    #[test]
    fn test_closure() {
        let mut calls = 0;
        let mut p = |c: &[u8]| {
            calls += 1;
            c.len() == 2
        };
        assert!(!p.accept(b"a"));
        assert!(p.accept(b"ab"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_sha256_matches_computed_digest() {
        let digest = hex::encode(Sha256::digest(b"Ha!"));
        let mut p = Sha256Digest::from_hex(&digest).unwrap();
        assert!(p.accept(b"Ha!"));
        assert!(!p.accept(b"Ha?"));

        let mut upper = Sha256Digest::from_hex(&digest.to_uppercase()).unwrap();
        assert!(upper.accept(b"Ha!"));
    }

    #[test]
    fn test_sha256_known_vector() {
        // sha256("abc")
        let mut p = Sha256Digest::from_hex(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        )
        .unwrap();
        assert!(p.accept(b"abc"));
        assert!(!p.accept(b"abd"));
    }

    #[test]
    fn test_builtin() {
        let mut p = Builtin::Exact(Exact::new("abc"));
        assert!(p.accept(b"abc"));

        let digest = hex::encode(Sha256::digest(b"xyz"));
        let mut p = Builtin::Sha256(Sha256Digest::from_hex(&digest).unwrap());
        assert!(p.accept(b"xyz"));
        assert!(!p.accept(b"abc"));
    }

    #[test]
    fn test_sha256_invalid() {
        assert!(matches!(
            Sha256Digest::from_hex("zz"),
            Err(Error::InvalidDigest(_))
        ));
        // 長さ不足
        assert!(Sha256Digest::from_hex("abcd").is_err());
    }
}
