use hourblocks::core::distribute;

#[test]
fn test_distribute_front_loads_remainder() {
    assert_eq!(distribute(10, 7), vec![2, 2, 2, 1, 1, 1, 1]);
    assert_eq!(distribute(0, 7), vec![0; 7]);
    assert_eq!(distribute(7, 7), vec![1; 7]);
    assert_eq!(distribute(8, 3), vec![3, 3, 2]);
    assert_eq!(distribute(5, 1), vec![5]);
}

#[test]
fn test_distribute_sum_and_spread_over_many_inputs() {
    for total in 0..=60u32 {
        for count in 1..=10usize {
            let split = distribute(total, count);

            assert_eq!(split.len(), count);
            assert_eq!(split.iter().sum::<u32>(), total, "sum for {total}/{count}");

            let max = *split.iter().max().unwrap();
            let min = *split.iter().min().unwrap();
            assert!(max - min <= 1, "spread for {total}/{count}: {split:?}");

            let remainder = total as usize % count;
            let ceil = total.div_ceil(count as u32);
            assert!(split[..remainder].iter().all(|v| *v == ceil));
        }
    }
}

#[test]
fn test_distribute_is_deterministic() {
    assert_eq!(distribute(11, 4), distribute(11, 4));
}

#[test]
fn test_distribute_zero_count_is_empty() {
    assert!(distribute(9, 0).is_empty());
}
