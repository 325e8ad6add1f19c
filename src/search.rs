//! 長さを1文字ずつ伸ばしながら候補を総当たりする

use tracing::{debug, trace};

use crate::candidate::Candidate;
use crate::charset::Charset;
use crate::counter::Counter;
use crate::error::Result;
use crate::predicate::Predicate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found { candidate: Vec<u8>, attempts: u64 },
    Exhausted { attempts: u64 },
}

impl Outcome {
    /// predicateを呼んだ回数
    pub fn attempts(&self) -> u64 {
        match self {
            Outcome::Found { attempts, .. } | Outcome::Exhausted { attempts } => *attempts,
        }
    }

    pub fn found(&self) -> Option<&[u8]> {
        match self {
            Outcome::Found { candidate, .. } => Some(candidate.as_slice()),
            Outcome::Exhausted { .. } => None,
        }
    }
}

// 探索中の不変の情報を保持
#[derive(Debug, Clone)]
pub struct Search<'a> {
    charset: &'a Charset,
    max_len: usize,
    prefix: Vec<u8>,
}

impl<'a> Search<'a> {
    pub fn new(charset: &'a Charset, max_len: usize) -> Self {
        Self {
            charset,
            max_len,
            prefix: Vec::new(),
        }
    }

    /// 全候補に共通する接頭辞を設定する。長さの検証は `run` で行う
    pub fn prefix(mut self, prefix: &[u8]) -> Self {
        self.prefix = prefix.to_vec();
        self
    }

    /// 接頭辞が `max_len` を超えていればpredicateを一度も呼ばずにエラー
    pub fn run<P: Predicate + ?Sized>(&self, predicate: &mut P) -> Result<Outcome> {
        let mut candidate = Candidate::new(&self.prefix, self.max_len)?;
        search(self.charset, &mut candidate, predicate)
    }
}

/// 接頭辞だけの候補を1回試してから、接尾辞の長さを `1..=max_len - prefix_len` と
/// 伸ばしながら全組み合わせをpredicateに渡す。
///
/// 短い候補から順に試すので、最初に見つかるのは最短の解。
/// 生きているカウンタは常に1つだけ。
pub fn search<P: Predicate + ?Sized>(
    charset: &Charset,
    candidate: &mut Candidate,
    predicate: &mut P,
) -> Result<Outcome> {
    let mut attempts = 0;

    debug!(
        prefix = %String::from_utf8_lossy(candidate.prefix()),
        max_len = candidate.max_len(),
        charset_len = charset.len(),
        "starting search"
    );

    candidate.truncate_to_prefix();
    if check(predicate, candidate, &mut attempts) {
        return Ok(found(candidate, attempts));
    }

    for suffix_len in 1..=candidate.max_len() - candidate.prefix_len() {
        let mut counter = Counter::new(suffix_len, charset)?;
        debug!(
            len = candidate.prefix_len() + suffix_len,
            combinations = ?counter.combinations(),
            attempts,
            "extending search"
        );

        loop {
            candidate.fill_suffix(&counter);
            if check(predicate, candidate, &mut attempts) {
                return Ok(found(candidate, attempts));
            }

            if counter.advance() {
                break;
            }
        }
    }

    Ok(Outcome::Exhausted { attempts })
}

#[inline]
fn check<P: Predicate + ?Sized>(
    predicate: &mut P,
    candidate: &Candidate,
    attempts: &mut u64,
) -> bool {
    *attempts += 1;
    trace!("Trying {}", candidate);
    predicate.accept(candidate.as_bytes())
}

fn found(candidate: &Candidate, attempts: u64) -> Outcome {
    Outcome::Found {
        candidate: candidate.as_bytes().to_vec(),
        attempts,
    }
}
