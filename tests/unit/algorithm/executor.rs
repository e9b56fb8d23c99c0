//! Tests for the solve, assemble and scan pipeline

#[cfg(test)]
mod tests {
    use jigsaw::JigsawError;
    use jigsaw::algorithm::executor::{Reconstructor, Stage, reconstruct};
    use jigsaw::algorithm::generator::PuzzleGenerator;
    use jigsaw::algorithm::matcher::Pattern;
    use jigsaw::io::configuration::SEA_MONSTER;
    use jigsaw::spatial::{TileCatalog, Transform};
    use ndarray::Array2;

    fn monster() -> Pattern {
        Pattern::from_glyph(&SEA_MONSTER).unwrap()
    }

    // Tests that stages are announced in order
    #[test]
    fn test_stage_order() {
        let puzzle = PuzzleGenerator::new(2, 10, 3).unwrap().generate().unwrap();
        let mut stages = Vec::new();
        reconstruct(&puzzle.tiles, &monster(), |stage| stages.push(stage)).unwrap();
        assert_eq!(
            stages,
            vec![
                Stage::Cataloguing,
                Stage::Solving,
                Stage::Assembling,
                Stage::Scanning
            ]
        );
    }

    // Tests that planted monsters are found after reconstruction
    #[test]
    fn test_reconstruction_finds_planted_pattern() {
        let pattern = monster();
        let mut image = Array2::from_elem((24, 24), false);
        let oriented = pattern.transform(Transform::new(2, true));
        for &(r, c) in oriented.cells() {
            image[(2 + r, 3 + c)] = true;
        }
        image[(20, 20)] = true;

        let mut generator = PuzzleGenerator::new(3, 10, 29).unwrap();
        let puzzle = generator.generate_with_image(&image).unwrap();
        let catalog = TileCatalog::from_source_tiles(&puzzle.tiles).unwrap();
        let reconstruction = Reconstructor::new(&catalog, &pattern).run().unwrap();

        assert_eq!(reconstruction.corner_product(), puzzle.corner_product());
        assert_eq!(reconstruction.match_count(), 1);
        assert_eq!(reconstruction.uncovered(), 1);
        assert_eq!(reconstruction.image.dim(), (24, 24));
    }

    // Tests that catalog errors stop the pipeline before solving
    #[test]
    fn test_malformed_input_stops_pipeline() {
        let mut tiles = PuzzleGenerator::new(3, 10, 3).unwrap().generate().unwrap().tiles;
        tiles.truncate(8);
        let mut stages = Vec::new();
        let result = reconstruct(&tiles, &monster(), |stage| stages.push(stage));
        assert!(matches!(result, Err(JigsawError::MalformedInput { .. })));
        assert_eq!(stages, vec![Stage::Cataloguing]);
    }

    // Tests stage names
    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Cataloguing.to_string(), "cataloguing");
        assert_eq!(Stage::Scanning.to_string(), "scanning");
    }
}
