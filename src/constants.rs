//! Crate-wide constants.

/// Initial capacity of per-column buffers while reading a file.
pub const BUFFER_SIZE: usize = 256;

/// Position of the `value <= pivot` branch of a numerical split.
pub const LESS: usize = 0;
/// Position of the `value > pivot` branch of a numerical split.
pub const GREATER: usize = 1;

/// Width of the name column printed by the verbose report.
pub const PRINT_WIDTH_NAME: usize = 16;
/// Width of a value column printed by the verbose report.
pub const PRINT_WIDTH_VALUE: usize = 10;
/// Number of fractional digits printed by the verbose report.
pub const PRINT_PRECISION: usize = 5;
