//! Tests for catalog validation and lookups

#[cfg(test)]
mod tests {
    use jigsaw::JigsawError;
    use jigsaw::spatial::TileCatalog;
    use jigsaw::spatial::tiles::SourceTile;
    use ndarray::Array2;

    fn blank_tiles(count: usize, side: usize) -> Vec<SourceTile> {
        (0..count)
            .map(|i| SourceTile::new(100 + i as u64, Array2::from_elem((side, side), false)))
            .collect()
    }

    fn malformed_block(result: Result<TileCatalog, JigsawError>) -> Option<usize> {
        match result {
            Err(JigsawError::MalformedInput { block, .. }) => block,
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    // Tests a valid four-tile catalog
    #[test]
    fn test_valid_catalog() {
        let catalog = TileCatalog::from_source_tiles(&blank_tiles(4, 4)).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.dim(), 2);
        assert_eq!(catalog.edge_length(), 4);
        assert_eq!(catalog.interior_size(), 2);
        assert_eq!(catalog.codec().length(), 4);
        assert_eq!(catalog.tiles().len(), 4);
        assert_eq!(catalog.interior(3).map(|block| block.dim()), Some((2, 2)));
        assert!(catalog.interior(4).is_none());
        assert_eq!(catalog.tile(1).map(|t| t.id()), Some(101));
        assert_eq!(catalog.position_of(102), Some(2));
        assert_eq!(catalog.position_of(7), None);
    }

    // Tests that an empty catalog is rejected
    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(malformed_block(TileCatalog::from_source_tiles(&[])), None);
    }

    // Tests that tile counts that are not perfect squares are rejected
    #[test]
    fn test_non_square_count_rejected() {
        for count in [2, 3, 5, 8, 10] {
            let result = TileCatalog::from_source_tiles(&blank_tiles(count, 4));
            assert_eq!(malformed_block(result), None, "count {count}");
        }
        assert!(TileCatalog::from_source_tiles(&blank_tiles(1, 4)).is_ok());
        assert!(TileCatalog::from_source_tiles(&blank_tiles(9, 4)).is_ok());
    }

    // Tests that a tile of a different edge length is pinned to its block
    #[test]
    fn test_inconsistent_edge_length_rejected() {
        let mut tiles = blank_tiles(4, 4);
        tiles[2] = SourceTile::new(500, Array2::from_elem((5, 5), false));
        assert_eq!(malformed_block(TileCatalog::from_source_tiles(&tiles)), Some(2));
    }

    // Tests that rectangular tiles are rejected
    #[test]
    fn test_rectangular_tile_rejected() {
        let mut tiles = blank_tiles(4, 4);
        tiles[1] = SourceTile::new(500, Array2::from_elem((4, 5), false));
        assert_eq!(malformed_block(TileCatalog::from_source_tiles(&tiles)), Some(1));
    }

    // Tests that duplicate ids are rejected at the second occurrence
    #[test]
    fn test_duplicate_id_rejected() {
        let mut tiles = blank_tiles(4, 4);
        tiles[3].id = tiles[0].id;
        assert_eq!(malformed_block(TileCatalog::from_source_tiles(&tiles)), Some(3));
    }

    // Tests that tiles too small to have an interior are rejected
    #[test]
    fn test_edge_length_too_short() {
        let result = TileCatalog::from_source_tiles(&blank_tiles(4, 2));
        assert_eq!(malformed_block(result), Some(0));
    }
}
