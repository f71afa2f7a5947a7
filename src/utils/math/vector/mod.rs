pub mod math;

use num::Num;

use crate::utils::sort::radix_sort_u32_soa;

/// ZeroSpVec は 0 要素を疎とした疎ベクトル
/// indices と values を並列に持つ (SoA)
///
/// Invariant: `inds` is strictly ascending, every index is `< len`,
/// and `inds.len() == vals.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// All-zero vector of dimension `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, nnz: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(nnz),
            vals: Vec::with_capacity(nnz),
            len,
        }
    }

    /// Build from (index, value) pairs in any order.
    /// Duplicate indices are summed and zeros are dropped.
    ///
    /// # Panics
    /// if an index is out of `len`
    pub fn from_unsorted(len: usize, mut inds: Vec<u32>, mut vals: Vec<N>) -> Self {
        radix_sort_u32_soa(&mut inds, &mut vals);
        let mut out = Self::with_capacity(len, inds.len());
        for (idx, val) in inds.into_iter().zip(vals) {
            assert!((idx as usize) < len, "index {idx} out of range {len}");
            match (out.inds.last(), out.vals.last_mut()) {
                (Some(&last), Some(acc)) if last == idx => *acc = *acc + val,
                _ => {
                    out.inds.push(idx);
                    out.vals.push(val);
                }
            }
        }
        out.retain_non_zero();
        out
    }

    pub fn from_dense(dense: &[N]) -> Self {
        let mut out = Self::new(dense.len());
        for (i, &v) in dense.iter().enumerate() {
            if v != N::zero() {
                out.inds.push(i as u32);
                out.vals.push(v);
            }
        }
        out
    }

    /// Dimension of the vector (zeros included)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// Value at `index`, zero when not stored
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// Iterate stored entries in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().map(|&i| i as usize).zip(self.vals.iter().copied())
    }

    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (i, v) in self.raw_iter() {
            dense[i] = v;
        }
        dense
    }

    fn retain_non_zero(&mut self) {
        let mut w = 0;
        for r in 0..self.inds.len() {
            if self.vals[r] != N::zero() {
                self.inds[w] = self.inds[r];
                self.vals[w] = self.vals[r];
                w += 1;
            }
        }
        self.inds.truncate(w);
        self.vals.truncate(w);
    }
}
