//! 文字集合上の固定長文字列を辞書順に列挙するカウンタ

use crate::charset::Charset;
use crate::error::{Error, Result};

/// 固定長の文字列を `charset.len()` 進数の数値として保持する。
///
/// 各桁は文字集合の添字で、先頭の桁が最上位。
/// 全桁0から始めて `advance` を繰り返すと `k^n` 通りを昇順に一度ずつ訪れる。
#[derive(Debug, Clone)]
pub struct Counter<'a> {
    charset: &'a Charset,
    digits: Vec<usize>,
}

impl<'a> Counter<'a> {
    pub fn new(len: usize, charset: &'a Charset) -> Result<Self> {
        let mut digits = Vec::new();
        digits
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { len })?;
        digits.resize(len, 0);

        Ok(Self { charset, digits })
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[cfg(test)]
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// 1周の組み合わせ数。u128に収まらなければNone
    pub fn combinations(&self) -> Option<u128> {
        let exp = u32::try_from(self.digits.len()).ok()?;
        (self.charset.len() as u128).checked_pow(exp)
    }

    /// 現在の値を `out[..len]` に書き出す
    pub fn render(&self, out: &mut [u8]) {
        assert!(
            out.len() >= self.digits.len(),
            "render target of {} bytes is shorter than counter length {}",
            out.len(),
            self.digits.len()
        );

        out.iter_mut()
            .zip(&self.digits)
            .for_each(|(o, &d)| *o = self.charset.get(d));
    }

    /// 1つ進める。最上位の桁から繰り上がって全桁0に戻ったらtrue
    pub fn advance(&mut self) -> bool {
        let max_digit = self.charset.len() - 1;

        for d in self.digits.iter_mut().rev() {
            if *d == max_digit {
                *d = 0;
            } else {
                *d += 1;
                return false;
            }
        }

        true
    }
}
