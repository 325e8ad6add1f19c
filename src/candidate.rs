//! 探索中の候補文字列バッファ

use crate::counter::Counter;
use crate::error::{Error, Result};

/// 固定の接頭辞 `[0, prefix_len)` と可変の接尾辞 `[prefix_len, len)` からなる候補。
///
/// 接頭辞は構築時に一度だけ書き込まれ、以後は可変参照を外に出さない。
#[derive(Debug, Clone)]
pub struct Candidate {
    buf: Vec<u8>,
    prefix_len: usize,
    len: usize,
}

impl Candidate {
    pub fn new(prefix: &[u8], max_len: usize) -> Result<Self> {
        if prefix.len() > max_len {
            return Err(Error::PrefixTooLong {
                prefix: prefix.len(),
                max: max_len,
            });
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(max_len)
            .map_err(|_| Error::Allocation { len: max_len })?;
        buf.extend_from_slice(prefix);
        buf.resize(max_len, 0);

        Ok(Self {
            buf,
            prefix_len: prefix.len(),
            len: prefix.len(),
        })
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn max_len(&self) -> usize {
        self.buf.len()
    }

    pub fn prefix(&self) -> &[u8] {
        &self.buf[..self.prefix_len]
    }

    /// 現在の候補。predicateに渡すのはこの範囲だけ
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// 接尾辞を捨てて接頭辞だけの候補に戻す
    pub fn truncate_to_prefix(&mut self) {
        self.len = self.prefix_len;
    }

    /// カウンタの値を接尾辞に書き込み、長さを `prefix_len + counter.len()` にする
    pub fn fill_suffix(&mut self, counter: &Counter) {
        let len = self.prefix_len + counter.len();
        assert!(
            len <= self.buf.len(),
            "suffix of {} bytes overflows candidate buffer of {} bytes",
            counter.len(),
            self.buf.len()
        );

        counter.render(&mut self.buf[self.prefix_len..len]);
        self.len = len;
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
