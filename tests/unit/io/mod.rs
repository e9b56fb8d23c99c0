mod log;
mod parser;
mod progress;
