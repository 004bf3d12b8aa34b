//! Tests for the closed-form Josephus survivor

#[cfg(test)]
mod tests {
    use cs_classics::ring::{JosephusRing, josephus_survivor};

    #[test]
    fn test_known_survivors() {
        assert_eq!(josephus_survivor(5, 1, 3), Some(4));
        assert_eq!(josephus_survivor(41, 1, 3), Some(31));
        assert_eq!(josephus_survivor(7, 1, 2), Some(7));
        assert_eq!(josephus_survivor(1, 1, 1), Some(1));
    }

    #[test]
    fn test_rejects_what_the_ring_rejects() {
        assert_eq!(josephus_survivor(0, 1, 1), None);
        assert_eq!(josephus_survivor(5, 0, 3), None);
        assert_eq!(josephus_survivor(5, 6, 3), None);
        assert_eq!(josephus_survivor(5, 1, 0), None);
        assert_eq!(josephus_survivor(5, 1, 6), None);
    }

    // Every valid argument combination on small rings agrees with simulation
    #[test]
    fn test_matches_simulation() {
        for count in 1..=30 {
            for start in 1..=count {
                for step in 1..=count {
                    let mut ring = JosephusRing::build(count).unwrap();
                    let simulated = ring.eliminate(start, step).unwrap().survivor;
                    assert_eq!(
                        josephus_survivor(count, start, step),
                        Some(simulated),
                        "count {count}, start {start}, step {step}"
                    );
                }
            }
        }
    }
}
