//! Tests for edge extraction, interior stripping and tile orientation

#[cfg(test)]
mod tests {
    use jigsaw::spatial::Transform;
    use jigsaw::spatial::edges::EdgeCodec;
    use jigsaw::spatial::tiles::{SourceTile, Tile};
    use ndarray::{Array2, array};
    use std::collections::HashSet;

    // ##.
    // ..#
    // #..
    fn sample_tile() -> SourceTile {
        SourceTile::new(
            7,
            array![
                [true, true, false],
                [false, false, true],
                [true, false, false]
            ],
        )
    }

    // Tests clockwise reading directions of all four edges
    #[test]
    fn test_edge_tile_reading_directions() {
        let codec = EdgeCodec::new(3).unwrap();
        let tile = sample_tile().edge_tile(&codec);
        assert_eq!(tile.id(), 7);
        assert_eq!(tile.top(), 0b110);
        assert_eq!(tile.right(), 0b010);
        assert_eq!(tile.bottom(), 0b001);
        assert_eq!(tile.left(), 0b101);
        assert_eq!(tile.edges(), [0b110, 0b010, 0b001, 0b101]);
    }

    // Tests border stripping and the size of the result
    #[test]
    fn test_interior_strips_border() {
        assert_eq!(sample_tile().interior(), array![[false]]);

        let block = Array2::from_shape_fn((5, 5), |(r, c)| r == 2 && c == 3);
        let interior = SourceTile::new(1, block).interior();
        assert_eq!(interior.dim(), (3, 3));
        assert!(interior[(1, 2)]);
        assert_eq!(interior.iter().filter(|&&p| p).count(), 1);
    }

    // Tests shape queries on square and rectangular blocks
    #[test]
    fn test_shape_queries() {
        assert!(sample_tile().is_square());
        assert_eq!(sample_tile().side(), 3);
        let wide = SourceTile::new(2, Array2::from_elem((3, 4), false));
        assert!(!wide.is_square());
    }

    // Tests edge membership
    #[test]
    fn test_has_edge() {
        let tile = Tile::new(1, [1, 2, 3, 4]);
        assert!(tile.has_edge(3));
        assert!(!tile.has_edge(5));
    }

    // Tests that transforming edges agrees with re-reading transformed pixels
    #[test]
    fn test_edge_transform_matches_pixel_transform() {
        let codec = EdgeCodec::new(5).unwrap();
        let block = Array2::from_shape_fn((5, 5), |(r, c)| (r * 7 + c * 3 + r * c) % 4 == 1);
        let source = SourceTile::new(99, block);
        let tile = source.edge_tile(&codec);

        for transform in Transform::ALL {
            let pixels = transform.apply_to_array(source.pixels.view());
            let reread = SourceTile::new(99, pixels).edge_tile(&codec);
            assert_eq!(tile.transform(transform, &codec), reread, "{transform}");
        }
    }

    // Tests that an asymmetric tile has eight distinct orientations
    #[test]
    fn test_eight_distinct_orientations() {
        let codec = EdgeCodec::new(3).unwrap();
        let tile = sample_tile().edge_tile(&codec);
        let orientations: HashSet<[u32; 4]> = Transform::ALL
            .iter()
            .map(|&t| tile.transform(t, &codec).edges())
            .collect();
        assert_eq!(orientations.len(), 8);
    }

    // Tests that a fully symmetric tile collapses to one orientation
    #[test]
    fn test_symmetric_tile_orientations() {
        let codec = EdgeCodec::new(3).unwrap();
        let tile = SourceTile::new(1, Array2::from_elem((3, 3), true)).edge_tile(&codec);
        let orientations: HashSet<[u32; 4]> = Transform::ALL
            .iter()
            .map(|&t| tile.transform(t, &codec).edges())
            .collect();
        assert_eq!(orientations.len(), 1);
    }

    // Tests that orientation keeps the id and identity keeps the edges
    #[test]
    fn test_transform_keeps_id() {
        let codec = EdgeCodec::new(3).unwrap();
        let tile = sample_tile().edge_tile(&codec);
        assert_eq!(tile.transform(Transform::IDENTITY, &codec), tile);
        for transform in Transform::ALL {
            assert_eq!(tile.transform(transform, &codec).id(), 7);
        }
    }
}
