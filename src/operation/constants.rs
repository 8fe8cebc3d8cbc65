// Limits that keep the search tractable; results must not depend on anything else
pub const MAX_POWER_EXPONENT: u32 = 10;
pub const MAX_SHIFT_AMOUNT: u32 = 64;
