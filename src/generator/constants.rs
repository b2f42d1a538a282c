// Configuration constants for the generator module
pub const DEFAULT_SQUARE_DEPTH: usize = 2;
pub const MAX_SQUARE_DEPTH: usize = 4;
