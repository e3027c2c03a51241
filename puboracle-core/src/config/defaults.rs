// Single source of truth for all default values.

// --- Counter ---
pub const DEFAULT_DELIMITER: char = ';';
pub const DEFAULT_COUNTER_EXCLUDE: [&str; 2] = ["", " "];

// --- Merge ---
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_LOOK_AHEAD: usize = 100;
pub const DEFAULT_THRESHOLD: f64 = 0.8;
pub const DEFAULT_NGRAM_SIZE: usize = 2;

// --- Graph ---
pub const DEFAULT_DIRECTED: bool = false;
pub const DEFAULT_ALLOW_MULTIPLE: bool = true;
pub const DEFAULT_ALLOW_LOOPS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
