//! Central constants for the greeter output
//!
//! All string literals and fixed numeric inputs are defined here to avoid
//! duplication and keep the printed contract in one place.

/// First line written to stdout
pub const HELLO_LINE: &str = "Hello from TypeScript!";

/// Second line written to stdout, held as a typed constant
pub const GREETING: &str = "TypeScript is working!";

/// Label preceding the addends and sum on the third line
pub const SUM_LABEL: &str = "2 + 3 =";

/// First addend passed to [`crate::math::add`]
pub const LHS_ADDEND: i64 = 2;

/// Second addend passed to [`crate::math::add`]
pub const RHS_ADDEND: i64 = 3;
