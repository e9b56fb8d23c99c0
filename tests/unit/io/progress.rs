//! Tests for progress bar management

#[cfg(test)]
mod tests {
    use jigsaw::algorithm::executor::Stage;
    use jigsaw::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    // Tests a small batch with one bar per file
    #[test]
    fn test_individual_bars() {
        let mut manager = ProgressManager::new();
        assert_eq!(manager.file_count(), 0);
        manager.initialize(2);
        assert_eq!(manager.file_count(), 2);

        manager.start_file(0, Path::new("a.txt"));
        manager.update_stage(0, Stage::Solving);
        manager.update_stage(0, Stage::Scanning);
        manager.complete_file(0, Duration::from_millis(5));
        manager.start_file(1, Path::new("b.txt"));
        manager.fail_file(1);
        manager.finish();
    }

    // Tests batch mode, where bars are recycled across many files
    #[test]
    fn test_batch_mode() {
        let mut manager = ProgressManager::default();
        manager.initialize(12);
        for index in 0..12 {
            manager.start_file(index, Path::new("puzzle.txt"));
            manager.update_stage(index, Stage::Assembling);
            manager.complete_file(index, Duration::ZERO);
        }
        manager.finish();
        assert_eq!(manager.file_count(), 12);
    }

    // Tests that updates before initialisation are ignored
    #[test]
    fn test_updates_without_bars() {
        let manager = ProgressManager::new();
        manager.start_file(3, Path::new("x.txt"));
        manager.update_stage(3, Stage::Cataloguing);
        manager.fail_file(3);
        manager.finish();
    }
}
