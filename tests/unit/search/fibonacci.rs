//! Tests for the Fibonacci table and Fibonacci search

#[cfg(test)]
mod tests {
    use cs_classics::search::{fibonacci_numbers, fibonacci_search};

    const SAMPLE: [i64; 7] = [1, 8, 10, 89, 100, 100, 123];

    #[test]
    fn test_table_ends_at_first_term_covering_len() {
        assert_eq!(fibonacci_numbers(0), vec![1, 1]);
        assert_eq!(fibonacci_numbers(1), vec![1, 1]);
        assert_eq!(fibonacci_numbers(2), vec![1, 1, 2]);
        assert_eq!(fibonacci_numbers(7), vec![1, 1, 2, 3, 5, 8]);
        assert_eq!(fibonacci_numbers(8), vec![1, 1, 2, 3, 5, 8]);
        assert_eq!(fibonacci_numbers(9), vec![1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_sample_lookups() {
        assert_eq!(fibonacci_search(&SAMPLE, &100), Some(4));
        assert_eq!(fibonacci_search(&SAMPLE, &1), Some(0));
        assert_eq!(fibonacci_search(&SAMPLE, &89), Some(3));
        assert_eq!(fibonacci_search(&SAMPLE, &123), Some(6));
        assert_eq!(fibonacci_search(&SAMPLE, &124), None);
        assert_eq!(fibonacci_search(&SAMPLE, &0), None);
        assert_eq!(fibonacci_search(&SAMPLE, &50), None);
    }

    // A hit in the padded tail maps back to the last real index
    #[test]
    fn test_padded_tail_returns_last_index() {
        let values = [1, 2, 3, 4, 5, 6];
        assert_eq!(fibonacci_search(&values, &6), Some(5));
        assert_eq!(fibonacci_search(&values, &7), None);
    }

    // Two elements drive the window index down to zero
    #[test]
    fn test_two_elements() {
        assert_eq!(fibonacci_search(&[3, 7], &3), Some(0));
        assert_eq!(fibonacci_search(&[3, 7], &7), Some(1));
        assert_eq!(fibonacci_search(&[3, 7], &5), None);
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [i32; 0] = [];
        assert_eq!(fibonacci_search(&empty, &1), None);
        assert_eq!(fibonacci_search(&[5], &5), Some(0));
        assert_eq!(fibonacci_search(&[5], &4), None);
        assert_eq!(fibonacci_search(&[5], &6), None);
    }

    #[test]
    fn test_every_element_found_for_many_lengths() {
        for len in 1..=60 {
            let values: Vec<usize> = (0..len).map(|i| i * 3).collect();
            for (index, value) in values.iter().enumerate() {
                assert_eq!(
                    fibonacci_search(&values, value),
                    Some(index),
                    "len {len}, value {value}"
                );
                assert_eq!(fibonacci_search(&values, &(value + 1)), None);
            }
        }
    }

    #[test]
    fn test_duplicate_run_returns_index_inside_run() {
        let values = [1, 2, 2, 2, 2, 3, 9, 9];
        let index = fibonacci_search(&values, &2).unwrap();
        assert!((1..=4).contains(&index));
        let index = fibonacci_search(&values, &9).unwrap();
        assert!((6..=7).contains(&index));
    }

    // Unsorted input has no defined answer but must not panic
    #[test]
    fn test_unsorted_input_does_not_panic() {
        let values = [9, 1, 8, 2, 7, 3];
        for target in 0..10 {
            let _ = fibonacci_search(&values, &target);
        }
    }

    #[test]
    fn test_works_with_strings() {
        let words = ["apple", "banana", "cherry", "damson"];
        assert_eq!(fibonacci_search(&words, &"cherry"), Some(2));
        assert_eq!(fibonacci_search(&words, &"elder"), None);
    }
}
