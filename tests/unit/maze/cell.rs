//! Tests for cell codes and symbols

#[cfg(test)]
mod tests {
    use cs_classics::maze::Cell;

    const ALL: [Cell; 4] = [Cell::Open, Cell::Wall, Cell::Visited, Cell::DeadEnd];

    // Codes follow the classic 0/1/2/3 convention
    #[test]
    fn test_codes_match_classic_convention() {
        assert_eq!(Cell::Open.code(), 0);
        assert_eq!(Cell::Wall.code(), 1);
        assert_eq!(Cell::Visited.code(), 2);
        assert_eq!(Cell::DeadEnd.code(), 3);
    }

    #[test]
    fn test_code_and_symbol_parse_back() {
        for cell in ALL {
            assert_eq!(Cell::from_code(cell.code()), Some(cell));
            assert_eq!(Cell::from_char(cell.symbol()), Some(cell));
            assert_eq!(
                Cell::from_char(char::from(b'0' + cell.code())),
                Some(cell)
            );
        }
        assert_eq!(Cell::from_code(4), None);
        assert_eq!(Cell::from_char('?'), None);
    }

    #[test]
    fn test_only_open_cells_are_enterable() {
        assert!(Cell::Open.is_open());
        assert!(!Cell::Wall.is_open());
        assert!(!Cell::Visited.is_open());
        assert!(!Cell::DeadEnd.is_open());

        assert!(Cell::Visited.is_explored());
        assert!(Cell::DeadEnd.is_explored());
        assert!(!Cell::Wall.is_explored());
        assert_eq!(Cell::default(), Cell::Open);
    }
}
