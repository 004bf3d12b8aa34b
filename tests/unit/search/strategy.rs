//! Tests for search algorithm selection

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use cs_classics::search::SearchAlgorithm;

    #[test]
    fn test_algorithms_agree_on_membership() {
        let values: Vec<i32> = (-20..20).map(|i| i * 5).collect();
        for target in -110..110 {
            let fibonacci = SearchAlgorithm::Fibonacci.search(&values, &target);
            let binary = SearchAlgorithm::Binary.search(&values, &target);
            assert_eq!(fibonacci, binary, "target {target}");
        }
    }

    #[test]
    fn test_names_round_trip_through_value_enum() {
        for algorithm in SearchAlgorithm::value_variants() {
            let name = algorithm.to_string();
            assert_eq!(SearchAlgorithm::from_str(&name, false), Ok(*algorithm));
        }
        assert_eq!(SearchAlgorithm::default(), SearchAlgorithm::Fibonacci);
    }
}
