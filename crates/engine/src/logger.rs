use std::fs::File;
use std::io::Write;
use std::time::Instant;

use crate::moves::Move;

/// Buffered game log. Callers opt in; the engine itself never
/// requires one. The buffer is dumped to disk on demand so logging
/// stays off the hot path.
#[derive(Debug)]
pub struct GameLogger {
    pub log_buffer: String,
    advanced_logging: bool,
    game_start_time: Instant,
    move_count: u32,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            game_start_time: Instant::now(),
            move_count: 0,
        };

        logger.log("=== Game log started ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    /// Advanced logging turns on the per-node search records, which
    /// get large fast.
    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("🔬 Advanced logging enabled");
    }

    pub fn disable_advanced_logging(&mut self) {
        self.advanced_logging = false;
        self.log("📊 Advanced logging disabled");
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_human_move(&mut self, mv: &Move, time_ms: u64) {
        self.move_count += 1;
        let line = format!("{}. {} (Human move - {}ms)", self.move_count, mv, time_ms);
        self.log(&line);
    }

    pub fn log_engine_move(&mut self, mv: &Move, time_ms: u64, score: i32) {
        self.move_count += 1;
        let line = format!(
            "{}. {} (Engine move - {}ms) Eval: {}",
            self.move_count, mv, time_ms, score
        );
        self.log(&line);
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.game_start_time.elapsed().as_millis()
    }

    /// Writes the whole buffer to the given path.
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let mut file =
            File::create(path).map_err(|e| format!("could not create log file: {}", e))?;

        file.write_all(self.log_buffer.as_bytes())
            .map_err(|e| format!("could not write log file: {}", e))
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}
