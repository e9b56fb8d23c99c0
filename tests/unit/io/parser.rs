//! Tests for tile text parsing and serialisation

#[cfg(test)]
mod tests {
    use jigsaw::JigsawError;
    use jigsaw::io::parser::{format_tiles, parse_tiles, read_tiles, write_tiles};
    use jigsaw::spatial::tiles::SourceTile;
    use ndarray::array;
    use tempfile::TempDir;

    const TWO_TILES: &str = "Tile 2311:\n\
                             ##.\n\
                             ..#\n\
                             #..\n\
                             \n\
                             Tile 1951:\n\
                             ...\n\
                             .#.\n\
                             ###\n";

    fn block_of(result: Result<Vec<SourceTile>, JigsawError>) -> Option<usize> {
        match result {
            Err(JigsawError::MalformedInput { block, .. }) => block,
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    // Tests parsing of labels and pixel rows
    #[test]
    fn test_parse_two_tiles() {
        let tiles = parse_tiles(TWO_TILES).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].id, 2311);
        assert_eq!(
            tiles[0].pixels,
            array![
                [true, true, false],
                [false, false, true],
                [true, false, false]
            ]
        );
        assert_eq!(tiles[1].id, 1951);
        assert_eq!(tiles[1].pixels.row(2).to_vec(), vec![true, true, true]);
    }

    // Tests tolerance of extra blank lines and trailing whitespace
    #[test]
    fn test_blank_lines_tolerated() {
        let padded = format!("\n\n{}\n\n\n", TWO_TILES.replace('\n', "  \n"));
        let tiles = parse_tiles(&padded).unwrap();
        assert_eq!(tiles.len(), 2);
        assert!(parse_tiles("").unwrap().is_empty());
        assert!(parse_tiles("\n\n").unwrap().is_empty());
    }

    // Tests label validation
    #[test]
    fn test_bad_label() {
        assert_eq!(block_of(parse_tiles("Tle 1:\n#.#\n...\n#.#\n")), Some(0));
        assert_eq!(block_of(parse_tiles("Tile x:\n#.#\n...\n#.#\n")), Some(0));
        assert_eq!(block_of(parse_tiles("Tile 12\n#.#\n...\n#.#\n")), Some(0));
    }

    // Tests that non-square blocks and stray characters name their block
    #[test]
    fn test_bad_blocks() {
        let ragged = format!("{TWO_TILES}\nTile 3:\n#.#\n..\n#.#\n");
        assert_eq!(block_of(parse_tiles(&ragged)), Some(2));

        let short = "Tile 3:\n#.#\n...\n";
        assert_eq!(block_of(parse_tiles(short)), Some(0));

        let stray = "Tile 3:\n#.#\n.x.\n#.#\n";
        assert_eq!(block_of(parse_tiles(stray)), Some(0));

        let label_only = "Tile 3:\n";
        assert_eq!(block_of(parse_tiles(label_only)), Some(0));
    }

    // Tests that formatted tiles parse back to the same tiles
    #[test]
    fn test_format_parses_back() {
        let tiles = parse_tiles(TWO_TILES).unwrap();
        let text = format_tiles(&tiles);
        assert_eq!(text, TWO_TILES);
        assert_eq!(parse_tiles(&text).unwrap(), tiles);
    }

    // Tests writing into a new directory and reading back
    #[test]
    fn test_write_and_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("puzzle.txt");
        let tiles = parse_tiles(TWO_TILES).unwrap();

        write_tiles(&path, &tiles).unwrap();
        assert_eq!(read_tiles(&path).unwrap(), tiles);
    }

    // Tests that a missing file reports the path
    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.txt");
        match read_tiles(&path) {
            Err(JigsawError::FileSystem { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected file system error, got {other:?}"),
        }
    }
}
