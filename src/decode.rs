//! Position decoding by binary space partitioning.
//!
//! Each symbol of a code keeps one half of a shrinking half-open range
//! `[lo, hi)`; after `bits` symbols the range holds exactly one integer,
//! which is the coordinate component. Equivalent to reading the prefix as
//! a binary number with [`Half::Upper`] as 1, but stated as range halving
//! so alphabets other than digit names fall out naturally.

use crate::{Error, Result};
use rayon::prelude::*;

/// Which half of the remaining range a symbol selects.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Half {
    Lower,
    Upper,
}

/// A two-symbol alphabet mapping each symbol to a [`Half`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Alphabet {
    lower: char,
    upper: char,
}

impl Alphabet {
    #[must_use]
    pub const fn new(lower: char, upper: char) -> Self {
        Self { lower, upper }
    }

    fn half(self, symbol: char) -> Option<Half> {
        if symbol == self.lower {
            Some(Half::Lower)
        } else if symbol == self.upper {
            Some(Half::Upper)
        } else {
            None
        }
    }
}

/// A decoded coordinate pair, `0 <= row < 2^R` and `0 <= col < 2^C` for
/// the layout that produced it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

/// Call-time decoding configuration: the two alphabets and the partition
/// depths. A code is the `row_bits`-symbol row prefix followed by the
/// `col_bits`-symbol column suffix.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Layout {
    pub row_alphabet: Alphabet,
    pub col_alphabet: Alphabet,
    pub row_bits: u32,
    pub col_bits: u32,
}

/// The boarding-pass layout: `F`/`B` rows, `L`/`R` columns, 128 rows by
/// 8 columns.
pub const BOARDING: Layout = Layout {
    row_alphabet: Alphabet::new('F', 'B'),
    col_alphabet: Alphabet::new('L', 'R'),
    row_bits: 7,
    col_bits: 3,
};

impl Default for Layout {
    fn default() -> Self {
        BOARDING
    }
}

impl Layout {
    /// Decodes one code into a [`Position`].
    ///
    /// # Errors
    ///
    /// [`Error::MalformedCode`] when the code is not exactly
    /// `row_bits + col_bits` symbols long, [`Error::UnknownSymbol`] when a
    /// symbol is outside the alphabet governing its position.
    pub fn decode(&self, code: &str) -> Result<Position> {
        let expected = (self.row_bits + self.col_bits) as usize;
        let actual = code.chars().count();
        if actual != expected {
            return Err(Error::MalformedCode { expected, actual });
        }

        let mut symbols = code.chars().enumerate();
        let row = partition(
            symbols.by_ref().take(self.row_bits as usize),
            self.row_alphabet,
            self.row_bits,
        )?;
        let col = partition(symbols, self.col_alphabet, self.col_bits)?;
        Ok(Position { row, col })
    }

    /// The dense encoding `row * 2^C + col`, injective over the coordinate
    /// domain.
    #[must_use]
    pub fn identifier(&self, position: Position) -> u32 {
        position.row << self.col_bits | position.col
    }

    /// Decodes a code straight to its identifier.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Layout::decode`].
    pub fn decode_id(&self, code: &str) -> Result<u32> {
        self.decode(code).map(|position| self.identifier(position))
    }

    /// Decodes a batch of codes in parallel, preserving input order.
    /// All-or-nothing: any failing code fails the whole batch.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Layout::decode`].
    pub fn decode_batch<S>(&self, codes: &[S]) -> Result<Vec<u32>>
    where
        S: AsRef<str> + Sync,
    {
        codes
            .par_iter()
            .map(|code| self.decode_id(code.as_ref()))
            .collect()
    }
}

/// Narrows `[0, 2^bits)` by one halving per symbol. The caller guarantees
/// the iterator yields exactly `bits` symbols, so the range ends holding a
/// single integer.
fn partition<I>(symbols: I, alphabet: Alphabet, bits: u32) -> Result<u32>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut lo = 0_u32;
    let mut hi = 1_u32 << bits;
    for (position, symbol) in symbols {
        let mid = lo + (hi - lo) / 2;
        match alphabet.half(symbol) {
            Some(Half::Lower) => hi = mid,
            Some(Half::Upper) => lo = mid,
            None => return Err(Error::UnknownSymbol { symbol, position }),
        }
    }
    debug_assert_eq!(lo + 1, hi);
    Ok(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn worked_examples() {
        for &(code, row, col, id) in &[
            ("BFFFBBFRRR", 70, 7, 567),
            ("FFFBBBFRRR", 14, 7, 119),
            ("BBFFBBFRLL", 102, 4, 820),
        ] {
            let position = BOARDING.decode(code).unwrap();
            assert_eq!(position, Position { row, col });
            assert_eq!(BOARDING.identifier(position), id);
            assert_eq!(BOARDING.decode_id(code), Ok(id));
        }
    }

    #[test]
    fn extremes_of_the_grid() {
        assert_eq!(
            BOARDING.decode("FFFFFFFLLL"),
            Ok(Position { row: 0, col: 0 })
        );
        assert_eq!(
            BOARDING.decode("BBBBBBBRRR"),
            Ok(Position { row: 127, col: 7 })
        );
    }

    #[test]
    fn short_code_is_malformed() {
        assert_eq!(
            BOARDING.decode("BFFFBBFRR"),
            Err(Error::MalformedCode { expected: 10, actual: 9 })
        );
        assert_eq!(
            BOARDING.decode(""),
            Err(Error::MalformedCode { expected: 10, actual: 0 })
        );
    }

    #[test]
    fn foreign_symbol_is_rejected() {
        assert_eq!(
            BOARDING.decode("BFFFBBXRRR"),
            Err(Error::UnknownSymbol { symbol: 'X', position: 6 })
        );
    }

    #[test]
    fn row_symbol_in_column_section_is_rejected() {
        // F belongs to the row alphabet only.
        assert_eq!(
            BOARDING.decode("BFFFBBFRRF"),
            Err(Error::UnknownSymbol { symbol: 'F', position: 9 })
        );
    }

    #[test]
    fn custom_layout() {
        let layout = Layout {
            row_alphabet: Alphabet::new('0', '1'),
            col_alphabet: Alphabet::new('a', 'b'),
            row_bits: 4,
            col_bits: 2,
        };
        assert_eq!(
            layout.decode("1100ba"),
            Ok(Position { row: 12, col: 2 })
        );
        assert_eq!(layout.decode_id("1100ba"), Ok(50));
    }

    #[test]
    fn identifier_is_injective_over_the_grid() {
        let mut seen = crate::HashSet::default();
        for row in 0..1 << BOARDING.row_bits {
            for col in 0..1 << BOARDING.col_bits {
                assert!(seen.insert(BOARDING.identifier(Position { row, col })));
            }
        }
        assert_eq!(seen.len(), 1_usize << (BOARDING.row_bits + BOARDING.col_bits));
    }

    #[test]
    fn batch_preserves_input_order() {
        let codes = ["BFFFBBFRRR", "FFFBBBFRRR", "BBFFBBFRLL"];
        assert_eq!(BOARDING.decode_batch(&codes), Ok(vec![567, 119, 820]));
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let codes = ["BFFFBBFRRR", "BFFFBBFRR"];
        assert_eq!(
            BOARDING.decode_batch(&codes),
            Err(Error::MalformedCode { expected: 10, actual: 9 })
        );
    }

    fn code_for(id: u16) -> String {
        let row = (3..10).rev().map(|n| if id >> n & 1 == 1 { 'B' } else { 'F' });
        let col = (0..3).rev().map(|n| if id >> n & 1 == 1 { 'R' } else { 'L' });
        row.chain(col).collect()
    }

    quickcheck! {
        fn halving_matches_binary_reading(id: u16) -> bool {
            let id = id & 0x3ff;
            BOARDING.decode_id(&code_for(id)) == Ok(u32::from(id))
        }

        fn decoding_is_idempotent(id: u16) -> bool {
            let code = code_for(id & 0x3ff);
            BOARDING.decode(&code) == BOARDING.decode(&code)
        }
    }
}
