// src/models.rs
use std::fmt;

/// Validated parameters for a single password generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl GenerationRequest {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 64;

    pub fn new(length: usize, include_uppercase: bool, include_digits: bool, include_special: bool) -> Self {
        Self {
            length,
            include_uppercase,
            include_digits,
            include_special,
        }
    }

    /// Number of optional categories that must appear at least once.
    pub fn required_categories(&self) -> usize {
        [self.include_uppercase, self.include_digits, self.include_special]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }

    pub fn length_in_range(length: usize) -> bool {
        (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}
