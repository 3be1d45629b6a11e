// src/generators/strength.rs
use crate::models::{GenerationRequest, Strength};

/// Coarse label derived from the request alone. Display only.
pub fn assess(request: &GenerationRequest) -> Strength {
    if request.length >= 12 && request.required_categories() == 3 {
        Strength::Strong
    } else if request.length >= 10 && request.required_categories() >= 1 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(length: usize, upper: bool, digits: bool, special: bool) -> Strength {
        assess(&GenerationRequest::new(length, upper, digits, special))
    }

    #[test]
    fn strong_needs_length_and_every_category() {
        assert_eq!(label(12, true, true, true), Strength::Strong);
        assert_eq!(label(64, true, true, true), Strength::Strong);
        assert_eq!(label(11, true, true, true), Strength::Medium);
        assert_eq!(label(20, true, true, false), Strength::Medium);
    }

    #[test]
    fn medium_boundary_at_ten() {
        assert_eq!(label(10, true, false, false), Strength::Medium);
        assert_eq!(label(10, false, false, true), Strength::Medium);
        assert_eq!(label(9, true, true, true), Strength::Weak);
    }

    #[test]
    fn weak_without_toggles() {
        assert_eq!(label(9, false, false, false), Strength::Weak);
        assert_eq!(label(64, false, false, false), Strength::Weak);
        assert_eq!(label(8, true, true, true), Strength::Weak);
    }
}
