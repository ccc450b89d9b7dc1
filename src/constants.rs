// Bounds enforced on every validated input

/// Fewest numbers a sequence may contain
pub const MIN_LENGTH: usize = 3;

/// Most numbers a sequence may contain
pub const MAX_LENGTH: usize = 8;

/// Smallest accepted value
pub const MIN_VALUE: i32 = 0;

/// Largest accepted value
pub const MAX_VALUE: i32 = 9;
