//! A fixed-size bitboard implementation using const generics.
//!
//! Boards are represented as an `N×N` grid packed into an unsigned integer
//! `T`. Used for cell sets: ship occupancy, fired cells, chosen targets.

use core::ops::{BitAnd, BitOr, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Board with exactly the cells for which `f(row, col)` holds.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bits = T::zero();
        for idx in 0..Self::BOARD_BITS {
            if f(idx / N, idx % N) {
                bits = bits | (T::one() << idx);
            }
        }
        BitBoard { bits }
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Grow every set cell into its 8-neighbourhood, clipped to the board.
    pub fn dilate(&self) -> Self {
        let mut out = *self;
        for (r, c) in self.iter_set_bits() {
            for nr in r.saturating_sub(1)..=(r + 1).min(N - 1) {
                for nc in c.saturating_sub(1)..=(c + 1).min(N - 1) {
                    out.bits = out.bits | (T::one() << (nr * N + nc));
                }
            }
        }
        out
    }

    /// Iterator over the set bits of the board.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Bitwise NOT for inverting a bitboard (within board bounds).
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
