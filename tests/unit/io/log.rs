//! Tests for logger initialisation

#[cfg(test)]
mod tests {
    use jigsaw::io::log::init_logger;

    // Tests that repeated initialisation is harmless
    #[test]
    fn test_init_logger_twice() {
        init_logger(false);
        init_logger(true);
        log::info!("logger initialised");
    }
}
