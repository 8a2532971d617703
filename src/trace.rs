//! Memory trace decoding.
//!
//! A trace line has the form `<type> <address> <process>`, e.g.
//! `s 0x0003fd20 1`. Addresses are turned into page numbers by shifting out
//! the in-page offset.

use {
    crate::{Access, AccessKind, LineIndex, PageNumber, ProcessId, SimError, SimResult},
    std::io::BufRead,
    tracing::debug,
};

/// Page number of an address, given the number of in-page offset bits.
pub fn page_number(address: u64, offset: u32) -> PageNumber {
    address.checked_shr(offset).unwrap_or(0)
}

/// Parses one trace record. The record is assigned trace line `line`.
///
/// Any access type other than `s` is treated as a load.
pub fn parse_record(text: &str, line: LineIndex, offset: u32) -> SimResult<Access> {
    let mut fields = text.split_whitespace();

    let kind = fields
        .next()
        .and_then(|field| field.chars().next())
        .map(AccessKind::from_char)
        .ok_or(SimError::MalformedRecord {
            line,
            reason: "missing access type",
        })?;

    let address = fields.next().ok_or(SimError::MalformedRecord {
        line,
        reason: "missing address",
    })?;
    let address = parse_address(address).ok_or_else(|| SimError::InvalidAddress {
        line,
        value: address.to_owned(),
    })?;

    let process = fields.next().ok_or(SimError::MalformedRecord {
        line,
        reason: "missing process id",
    })?;
    let process = process
        .parse()
        .ok()
        .and_then(ProcessId::from_index)
        .ok_or_else(|| SimError::InvalidProcess {
            line,
            value: process.to_owned(),
        })?;

    Ok(Access::new(kind, page_number(address, offset), process, line))
}

/// Decodes an unsigned address: `0x`, `0X` or `#` prefixed hexadecimal,
/// decimal otherwise.
fn parse_address(text: &str) -> Option<u64> {
    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('#'));
    match hex {
        Some(digits) => u64::from_str_radix(digits, 16).ok(),
        None => text.parse().ok(),
    }
}

/// Fully buffered memory trace.
///
/// Optimal replacement needs to see every future access before the replay
/// starts, hence the whole trace is kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    records: Vec<Access>,
}

impl Trace {
    /// Reads a whole trace. Blank lines are skipped and do not count as
    /// records.
    pub fn from_reader<R: BufRead>(reader: R, offset: u32) -> SimResult<Self> {
        let mut records = Vec::new();
        for text in reader.lines() {
            let text = text?;
            if text.trim().is_empty() {
                continue;
            }
            records.push(parse_record(&text, records.len(), offset)?);
        }
        debug!(records = records.len(), offset, "trace loaded");
        Ok(Self { records })
    }

    /// Parses a trace held in memory.
    pub fn parse(text: &str, offset: u32) -> SimResult<Self> {
        Self::from_reader(text.as_bytes(), offset)
    }

    /// Records in trace order.
    pub fn records(&self) -> &[Access] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the trace holds no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Access> for Trace {
    fn from_iter<T: IntoIterator<Item = Access>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Access;
    type IntoIter = std::slice::Iter<'a, Access>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
