use std::cmp::Ordering;

use num::Float;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// ドット積
    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &Self) -> N {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );
        let (a, b) = (&self.inds, &other.inds);
        let mut result = N::zero();
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    result = result + self.vals[i] * other.vals[j];
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq(&self) -> N {
        self.vals.iter().fold(N::zero(), |acc, &v| acc + v * v)
    }

    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq().sqrt()
    }

    pub fn scale(&mut self, scalar: N) {
        for v in self.vals.iter_mut() {
            *v = *v * scalar;
        }
    }

    /// Scale to unit L2 length. The zero vector stays zero.
    pub fn normalize_l2(&mut self) {
        let norm = self.norm();
        if norm > N::zero() {
            self.scale(N::one() / norm);
        }
    }

    /// self += other (merge of two sorted index lists)
    pub fn add_assign_vec(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len());
        let mut inds = Vec::with_capacity(self.nnz() + other.nnz());
        let mut vals = Vec::with_capacity(self.nnz() + other.nnz());
        let (mut i, mut j) = (0, 0);
        while i < self.inds.len() || j < other.inds.len() {
            let take = match (self.inds.get(i), other.inds.get(j)) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, _) => Ordering::Greater,
            };
            match take {
                Ordering::Equal => {
                    inds.push(self.inds[i]);
                    vals.push(self.vals[i] + other.vals[j]);
                    i += 1;
                    j += 1;
                }
                Ordering::Less => {
                    inds.push(self.inds[i]);
                    vals.push(self.vals[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    inds.push(other.inds[j]);
                    vals.push(other.vals[j]);
                    j += 1;
                }
            }
        }
        self.inds = inds;
        self.vals = vals;
    }

    /// Element-wise mean of `vecs`, every vector weighted equally.
    /// Returns the zero vector of dimension `len` for an empty slice.
    pub fn mean(vecs: &[Self], len: usize) -> Self {
        let mut acc = Self::new(len);
        if vecs.is_empty() {
            return acc;
        }
        for v in vecs {
            acc.add_assign_vec(v);
        }
        let n = <N as num::NumCast>::from(vecs.len()).unwrap_or_else(N::one);
        acc.scale(N::one() / n);
        acc
    }

    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// 0 when either side has zero magnitude. Clamped to [-1, 1] to absorb rounding.
    pub fn cosine_similarity(&self, other: &Self) -> N {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == N::zero() || norm_b == N::zero() {
            return N::zero();
        }
        let cos = self.dot(other) / (norm_a * norm_b);
        cos.max(-N::one()).min(N::one())
    }
}
