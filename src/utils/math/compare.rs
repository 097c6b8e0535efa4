use std::cmp::Ordering;

use num::Num;

/// Sparse vector
/// 非ゼロ要素のみ `(index, value)` で保持する
/// index は昇順
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVec<N>
where
    N: Num + Copy,
{
    entries: Vec<(usize, N)>,
}

impl<N> SparseVec<N>
where
    N: Num + Copy,
{
    /// Build from unordered entries
    /// zero values are dropped
    pub fn from_entries(mut entries: Vec<(usize, N)>) -> Self {
        entries.retain(|(_, v)| !v.is_zero());
        entries.sort_unstable_by_key(|(idx, _)| *idx);
        Self { entries }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.entries.iter().copied()
    }
}

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
/// ||a|| = sqrt(Σ(a_i^2))
///
/// Both iterators must yield indices in ascending order.
/// Either norm being zero gives 0.0.
pub fn cosine_similarity<N>(
    vec: impl Iterator<Item = (usize, N)>,
    other: impl Iterator<Item = (usize, N)>,
) -> f64
where
    N: Num + Copy + Into<f64>,
{
    let mut a_it = vec.fuse();
    let mut b_it = other.fuse();
    let mut a_next = a_it.next();
    let mut b_next = b_it.next();
    let mut norm_a = 0_f64;
    let mut norm_b = 0_f64;
    let mut dot = 0_f64;
    while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
        let (fa, fb): (f64, f64) = (va.into(), vb.into());
        match ia.cmp(&ib) {
            Ordering::Equal => {
                norm_a += fa * fa;
                norm_b += fb * fb;
                dot += fa * fb;
                a_next = a_it.next();
                b_next = b_it.next();
            }
            Ordering::Less => {
                norm_a += fa * fa;
                a_next = a_it.next();
            }
            Ordering::Greater => {
                norm_b += fb * fb;
                b_next = b_it.next();
            }
        }
    }
    while let Some((_, va)) = a_next { let fa: f64 = va.into(); norm_a += fa * fa; a_next = a_it.next(); }
    while let Some((_, vb)) = b_next { let fb: f64 = vb.into(); norm_b += fb * fb; b_next = b_it.next(); }
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        // 丸め誤差で 1.0 をわずかに超えることがある
        (dot / (norm_a.sqrt() * norm_b.sqrt())).min(1.0)
    }
}
