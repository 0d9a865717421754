//! RUC (Peruvian taxpayer number) validation.

/// Validate a RUC using the SUNAT check digit algorithm.
///
/// RUC format: 11 digits where the last digit is a checksum.
/// Weights: 5, 4, 3, 2, 7, 6, 5, 4, 3, 2
pub fn validate_ruc(ruc: &str) -> bool {
    if ruc.len() != 11 || !ruc.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = ruc.chars().filter_map(|c| c.to_digit(10)).collect();

    let weights = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
    let sum: u32 = digits
        .iter()
        .take(10)
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum();

    let check = match 11 - sum % 11 {
        10 => 0,
        11 => 1,
        n => n,
    };

    check == digits[10]
}

/// Whether the value has the shape of a RUC (11 ASCII digits).
pub fn is_ruc_shaped(value: &str) -> bool {
    value.len() == 11 && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ruc_valid() {
        assert!(validate_ruc("20486760576"));
        assert!(validate_ruc("20100070970"));
    }

    #[test]
    fn test_validate_ruc_invalid() {
        assert!(!validate_ruc("20123456789")); // Invalid checksum
        assert!(!validate_ruc("2048676057")); // Too short
        assert!(!validate_ruc("204867605760")); // Too long
        assert!(!validate_ruc("2048676057A"));
    }

    #[test]
    fn test_is_ruc_shaped() {
        assert!(is_ruc_shaped("20123456789"));
        assert!(!is_ruc_shaped("2012345678"));
        assert!(!is_ruc_shaped(""));
    }
}
