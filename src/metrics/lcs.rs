use crate::{error::MetricError, metrics::Metric};

/// Longest common subsequence ratio
///
/// `lcs(a, b) / max(|a|, |b|)` over token sequences, 0 when both are empty.
///
/// # Arguments
/// * `a`, `b` - token sequences
/// * `max_cells` - bound on `|a| * |b|`
///
/// # Errors
/// `MetricError::InputTooLarge` when the DP table would exceed `max_cells`.
pub fn lcs_ratio(a: &[&str], b: &[&str], max_cells: u64) -> Result<f64, MetricError> {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return Ok(0.0);
    }
    let cells = a.len() as u64 * b.len() as u64;
    if cells > max_cells {
        return Err(MetricError::InputTooLarge {
            metric: Metric::Lcs,
            cells,
            limit: max_cells,
        });
    }
    Ok(lcs_len(a, b) as f64 / longest as f64)
}

/// Length of the longest common subsequence
/// 2 行だけ保持する DP, メモリは短い方の長さに比例
pub fn lcs_len(a: &[&str], b: &[&str]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];
    for x in outer {
        for (j, y) in inner.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[inner.len()]
}
