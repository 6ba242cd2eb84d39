/// Split `total` into `count` integers that sum to `total` and differ by at
/// most one. The remainder goes to the earliest positions.
///
/// `distribute(10, 7) == [2, 2, 2, 1, 1, 1, 1]`
///
/// A `count` of 0 yields an empty vector.
pub fn distribute(total: u32, count: usize) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }

    let n = count as u64;
    let base = total as u64 / n;
    let remainder = total as u64 - base * n;

    (0..n)
        .map(|i| {
            let v = if i < remainder { base + 1 } else { base };
            v as u32
        })
        .collect()
}
