use std::slice::Chunks;

/// Records per bulk-insert call. Tuning only: smaller batches mean more
/// round trips, larger ones a bigger payload per call.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Partitions `records` into consecutive batches of at most `size` records.
///
/// Order is preserved and every batch except possibly the last is full, so
/// concatenating the batches reproduces the input exactly. `size` must be
/// at least 1; the config layer rejects anything smaller.
pub fn batches<T>(records: &[T], size: usize) -> Chunks<'_, T> {
    records.chunks(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenated_batches_reproduce_the_input_in_order() {
        let records: Vec<u32> = (0..23).collect();
        let rejoined: Vec<u32> = batches(&records, 5).flatten().copied().collect();
        assert_eq!(rejoined, records);
    }

    #[test]
    fn every_batch_but_the_last_is_full() {
        let records: Vec<u32> = (0..23).collect();
        let sizes: Vec<usize> = batches(&records, 5).map(<[u32]>::len).collect();
        assert_eq!(sizes, vec![5, 5, 5, 5, 3]);
    }

    #[test]
    fn batch_count_is_ceil_of_records_over_size() {
        for (count, size, expected) in [(0, 50, 0), (50, 50, 1), (51, 50, 2), (149, 50, 3)] {
            let records: Vec<u32> = (0..count).collect();
            assert_eq!(batches(&records, size).count(), expected);
        }
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let records: Vec<u32> = (0..10).collect();
        assert!(batches(&records, 5).all(|batch| batch.len() == 5));
    }
}
