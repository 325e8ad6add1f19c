use std::ffi::OsString;

use structopt::StructOpt;

use crate::charset::{Charset, PRINTABLE, PRINTABLE_FIRST, PRINTABLE_LAST};
use crate::error::{Error, Result};
use crate::predicate::{Builtin, Exact, Sha256Digest};

// --target も --sha256 も無いときに探す文字列
pub const SAMPLE_TARGET: &str = "Ha!";

/// Tries every string over a byte range, shortest first, until one is accepted.
#[derive(StructOpt, Debug)]
#[structopt(name = "bruteforce")]
pub struct Opt {
    /// Maximum total length of a candidate
    pub length: usize,

    /// Fixed prefix of every candidate (truncated to <length> bytes)
    #[structopt(parse(from_os_str))]
    pub startswith: Option<OsString>,

    /// First byte of the charset range [default: 33]
    #[structopt(long)]
    pub first: Option<u8>,

    /// Last byte of the charset range [default: 126]
    #[structopt(long)]
    pub last: Option<u8>,

    /// Accept the candidate equal to this string [default: Ha!]
    #[structopt(long, conflicts_with = "sha256", parse(from_os_str))]
    pub target: Option<OsString>,

    /// Accept the candidate whose SHA-256 digest is this hex string
    #[structopt(long)]
    pub sha256: Option<String>,

    /// Log every candidate tried
    #[structopt(long)]
    pub verbose: bool,

    /// Print the charset before searching
    #[structopt(long)]
    pub dump_charset: bool,
}

impl Opt {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else {
            "info"
        }
    }
}

/// 検証済みの設定
#[derive(Debug, Clone)]
pub struct Config {
    pub charset: Charset,
    pub max_len: usize,
    pub prefix: Vec<u8>,
    pub predicate: Builtin,
    pub dump_charset: bool,
}

impl TryFrom<Opt> for Config {
    type Error = Error;

    fn try_from(opt: Opt) -> Result<Self> {
        if opt.length == 0 {
            return Err(Error::InvalidLength);
        }

        let charset = match (opt.first, opt.last) {
            (None, None) => PRINTABLE.clone(),
            (first, last) => Charset::new(
                first.unwrap_or(PRINTABLE_FIRST),
                last.unwrap_or(PRINTABLE_LAST),
            )?,
        };

        let mut prefix = opt.startswith.map(into_bytes).transpose()?.unwrap_or_default();
        prefix.truncate(opt.length);

        let predicate = match (opt.sha256, opt.target) {
            (Some(digest), _) => Builtin::Sha256(Sha256Digest::from_hex(&digest)?),
            (None, Some(target)) => Builtin::Exact(Exact::new(into_bytes(target)?)),
            (None, None) => Builtin::Exact(Exact::new(SAMPLE_TARGET)),
        };

        Ok(Self {
            charset,
            max_len: opt.length,
            prefix,
            predicate,
            dump_charset: opt.dump_charset,
        })
    }
}

// 引数はバイト列としてそのまま使う
#[cfg(unix)]
fn into_bytes(s: OsString) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStringExt;
    Ok(s.into_vec())
}

#[cfg(not(unix))]
fn into_bytes(s: OsString) -> Result<Vec<u8>> {
    s.into_string()
        .map(String::into_bytes)
        .map_err(|s| Error::NonUtf8Argument(s.to_string_lossy().into_owned()))
}
