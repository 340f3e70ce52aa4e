//! Pure arithmetic used by the greeting sequence

/// Add two numbers.
///
/// Pure and deterministic: the result depends only on the inputs and no
/// observable side effect occurs. Overflow follows the platform's `i64`
/// semantics and is not handled here.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_known_pairs() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-1, 1), 0);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn test_add_commutative() {
        for &(a, b) in &[(2, 3), (-7, 42), (0, 9), (-1, -1)] {
            assert_eq!(add(a, b), add(b, a));
        }
    }

    #[test]
    fn test_add_identity() {
        for &a in &[0, 1, -1, 2, 3, 1_000_000] {
            assert_eq!(add(a, 0), a);
        }
    }
}
