//! Code tables for the date characters of the 12-character format.
//!
//! Both tables come from scanning a fixed alphabet, skipping an exclusion
//! set, and numbering the survivors consecutively. They are built during
//! constant evaluation, so the statics below are plain read-only data and
//! can be shared between threads without synchronisation.

pub const SEMESTER_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SEMESTER_EXCLUDED: &[u8] = b"AEIOUB";
pub const SEMESTER_START: u8 = 0;

pub const WEEK_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const WEEK_EXCLUDED: &[u8] = b"AEIOUB0SZ";
pub const WEEK_START: u8 = 1;

const ASCII_SLOTS: usize = 128;

/// Semester codes: `C`=0 through `Z`=19.
pub static SEMESTER_TABLE: CodeTable =
    CodeTable::build(SEMESTER_ALPHABET, SEMESTER_EXCLUDED, SEMESTER_START);

/// Week-in-half codes: `1`=1 through `Y`=27.
pub static WEEK_TABLE: CodeTable = CodeTable::build(WEEK_ALPHABET, WEEK_EXCLUDED, WEEK_START);

/// Character-to-value lookup over ASCII codes.
#[derive(Debug)]
pub struct CodeTable {
    values: [Option<u8>; ASCII_SLOTS],
    order: [u8; ASCII_SLOTS],
    len: usize,
    start: u8,
}

impl CodeTable {
    /// Builds a table from `alphabet` in scan order, skipping `excluded` and
    /// numbering from `start`. Non-ASCII input fails constant evaluation.
    pub const fn build(alphabet: &[u8], excluded: &[u8], start: u8) -> Self {
        let mut values = [None; ASCII_SLOTS];
        let mut order = [0u8; ASCII_SLOTS];
        let mut len = 0usize;
        let mut i = 0;
        while i < alphabet.len() {
            let code = alphabet[i];
            if !contains(excluded, code) && values[code as usize].is_none() {
                values[code as usize] = Some(start + len as u8);
                order[len] = code;
                len += 1;
            }
            i += 1;
        }
        Self {
            values,
            order,
            len,
            start,
        }
    }

    pub fn get(&self, code: char) -> Option<u8> {
        if !code.is_ascii() {
            return None;
        }
        self.values[code as usize]
    }

    /// Reverse lookup: the character that encodes `value`.
    pub fn code_for(&self, value: u8) -> Option<char> {
        let index = value.checked_sub(self.start)? as usize;
        if index < self.len {
            Some(self.order[index] as char)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.order[..self.len]
            .iter()
            .enumerate()
            .map(move |(index, &code)| (code as char, self.start + index as u8))
    }
}

const fn contains(set: &[u8], code: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == code {
            return true;
        }
        i += 1;
    }
    false
}
