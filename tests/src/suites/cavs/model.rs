//! Pure data model for CAVS response files.
//! No dependency on the rest of the harness.

/// ----------------------------------------------------------------
/// 1. Raw file structure
/// ----------------------------------------------------------------

/// One blank-line separated block of `Key = Value` lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RspRecord {
    /// 1-based line number of the record's first field
    pub line: usize,
    pub fields: Vec<(String, String)>,
}

impl RspRecord {
    /// Value of the first field named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed `.rsp` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RspFile {
    /// `[Key = Value]` section headers, in file order
    pub sections: Vec<(String, String)>,
    pub records: Vec<RspRecord>,
}

impl RspFile {
    /// Value of the first section header named `key`
    pub fn section(&self, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// ----------------------------------------------------------------
/// 2. Typed test cases
/// ----------------------------------------------------------------

/// ShortMsg / LongMsg case: hash `msg`, expect `md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCase {
    /// Position of the case within its file
    pub index: usize,
    pub len_bits: usize,
    pub msg: Vec<u8>,
    /// Expected digest, lowercase hex
    pub md: String,
}

/// One `COUNT`/`MD` pair of a Monte Carlo file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonteCheckpoint {
    pub count: usize,
    pub md: String,
}

/// Monte Carlo case: a seed and the chain of expected checkpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonteCase {
    pub seed: Vec<u8>,
    pub checkpoints: Vec<MonteCheckpoint>,
}
