//! Tests for argument parsing and command reports

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cs_classics::ClassicsError;
    use cs_classics::io::cli::{Cli, Command, Runner, parse_position};
    use cs_classics::maze::DirectionOrder;

    fn run(args: &[&str]) -> cs_classics::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("cs-classics").chain(args.iter().copied()))
            .unwrap();
        let mut runner = Runner::new(Vec::new());
        runner.run(&cli)?;
        Ok(String::from_utf8(runner.into_inner()).unwrap())
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3,4"), Ok([3, 4]));
        assert_eq!(parse_position(" 0 , 12 "), Ok([0, 12]));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,1").is_err());
        assert!(parse_position("1,-2").is_err());
    }

    #[test]
    fn test_maze_defaults() {
        let cli = Cli::try_parse_from(["cs-classics", "maze"]).unwrap();
        let Command::Maze(args) = cli.command else {
            unreachable!("Expected maze command");
        };
        assert_eq!(args.orders, vec![DirectionOrder::DOWN_RIGHT_UP_LEFT]);
        assert!(args.file.is_none());
        assert!(!args.compare);
    }

    #[test]
    fn test_maze_report_on_sample() {
        let out = run(&["maze"]).unwrap();
        assert!(out.starts_with("Before:\n 1 1 1 1 1 1 1 1\n"));
        assert!(out.contains("After (down,right,up,left):"));
        assert!(out.contains("Path (11 cells): (1,1) -> (2,1) -> (2,2)"));
        assert!(out.trim_end().ends_with("(6,6)"));
    }

    #[test]
    fn test_maze_compare_lists_both_orders() {
        let out = run(&["maze", "--compare"]).unwrap();
        assert!(out.contains("down,right,up,left"));
        assert!(out.contains("up,right,down,left"));
        // Equal path lengths keep the first order
        assert!(out.contains("After (down,right,up,left):"));
    }

    #[test]
    fn test_maze_compact_order() {
        let out = run(&["maze", "-o", "URDL"]).unwrap();
        assert!(out.contains("After (up,right,down,left):"));
        assert!(out.contains("Path (11 cells)"));
    }

    #[test]
    fn test_maze_unreachable_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sealed.txt");
        std::fs::write(&path, "#####\n#.#.#\n#####\n").unwrap();

        let out = run(&["maze", "-f", path.to_str().unwrap(), "-s", "1,1", "-t", "1,3"]).unwrap();
        assert!(out.contains("No path found"));
    }

    #[test]
    fn test_maze_start_out_of_bounds() {
        let err = run(&["maze", "-s", "9,9"]).unwrap_err();
        assert!(matches!(
            err,
            ClassicsError::InvalidParameter {
                parameter: "start",
                ..
            }
        ));
    }

    #[test]
    fn test_maze_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("maze.png");
        let text = dir.path().join("maze.txt");

        run(&[
            "maze",
            "--output",
            png.to_str().unwrap(),
            "--save",
            text.to_str().unwrap(),
        ])
        .unwrap();

        assert!(png.exists());
        let saved = std::fs::read_to_string(&text).unwrap();
        assert!(saved.contains('2'));
    }

    #[test]
    fn test_search_reports() {
        assert_eq!(
            run(&["search"]).unwrap(),
            "Found 100 at index 4 (fibonacci)\n"
        );
        assert_eq!(
            run(&["search", "-a", "binary"]).unwrap(),
            "Found 100 at index 5 (binary)\n"
        );
        assert_eq!(
            run(&["search", "-t", "7"]).unwrap(),
            "7 not found (fibonacci)\n"
        );
        assert_eq!(
            run(&["search", "--values", "-5,-1,3", "--target", "-1"]).unwrap(),
            "Found -1 at index 1 (fibonacci)\n"
        );
    }

    #[test]
    fn test_josephus_report() {
        let out = run(&["josephus", "--verify"]).unwrap();
        assert_eq!(
            out,
            "Ring: 1 2 3 4 5\nEliminated: 3 1 5 2\nSurvivor: 4\nVerified against closed form\n"
        );
    }

    // Large rings report a count instead of every id
    #[test]
    fn test_josephus_large_ring_summary() {
        let out = run(&["josephus", "-n", "100", "-k", "7", "-q"]).unwrap();
        assert!(!out.contains("Ring:"));
        assert!(out.contains("Eliminated 99 participants"));
        assert!(out.contains("Survivor: "));
    }

    #[test]
    fn test_josephus_invalid_arguments() {
        assert!(run(&["josephus", "-n", "0"]).is_err());
        assert!(run(&["josephus", "-k", "0"]).is_err());
        assert!(run(&["josephus", "-s", "6"]).is_err());
    }
}
