//! Tests for stitching tile interiors into the composite image

#[cfg(test)]
mod tests {
    use jigsaw::JigsawError;
    use jigsaw::algorithm::assembly::ImageAssembler;
    use jigsaw::algorithm::generator::PuzzleGenerator;
    use jigsaw::algorithm::solver::solve;
    use jigsaw::spatial::{ArrangementGrid, TileCatalog, Transform};

    // Tests that the assembled image is the generator's image up to a whole-grid symmetry
    #[test]
    fn test_assembles_source_image() {
        let puzzle = PuzzleGenerator::new(3, 10, 17).unwrap().generate().unwrap();
        let catalog = TileCatalog::from_source_tiles(&puzzle.tiles).unwrap();
        let solution = solve(&catalog).unwrap();

        let assembler = ImageAssembler::new(&catalog);
        assert_eq!(assembler.image_size(), 24);
        let image = assembler.assemble(solution.grid()).unwrap();
        assert_eq!(image.dim(), (24, 24));

        let matches_some_symmetry = Transform::ALL
            .iter()
            .any(|t| t.apply_to_array(puzzle.image.view()) == image);
        assert!(matches_some_symmetry);
    }

    // Tests that on-pixel counts survive assembly
    #[test]
    fn test_preserves_on_pixel_count() {
        let puzzle = PuzzleGenerator::new(2, 10, 4).unwrap().generate().unwrap();
        let catalog = TileCatalog::from_source_tiles(&puzzle.tiles).unwrap();
        let solution = solve(&catalog).unwrap();
        let image = ImageAssembler::new(&catalog).assemble(solution.grid()).unwrap();

        let count = |pixels: &ndarray::Array2<bool>| pixels.iter().filter(|&&p| p).count();
        assert_eq!(count(&image), count(&puzzle.image));
    }

    // Tests that a partial grid is rejected
    #[test]
    fn test_incomplete_grid_rejected() {
        let puzzle = PuzzleGenerator::new(2, 10, 2).unwrap().generate().unwrap();
        let catalog = TileCatalog::from_source_tiles(&puzzle.tiles).unwrap();
        let result = ImageAssembler::new(&catalog).assemble(&ArrangementGrid::new(2));
        assert!(matches!(
            result,
            Err(JigsawError::IncompleteArrangement { filled: 0, cells: 4 })
        ));
    }

    // Tests that a grid from a different sized catalog is rejected
    #[test]
    fn test_dimension_mismatch_rejected() {
        let small = PuzzleGenerator::new(2, 10, 8).unwrap().generate().unwrap();
        let small_catalog = TileCatalog::from_source_tiles(&small.tiles).unwrap();
        let small_solution = solve(&small_catalog).unwrap();

        let large = PuzzleGenerator::new(3, 10, 8).unwrap().generate().unwrap();
        let large_catalog = TileCatalog::from_source_tiles(&large.tiles).unwrap();

        let result = ImageAssembler::new(&large_catalog).assemble(small_solution.grid());
        assert!(matches!(result, Err(JigsawError::MalformedInput { .. })));
    }
}
