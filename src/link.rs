//! The fabricated short link shown on the page.

use std::fmt;

use rand::Rng;

use crate::codegen::generate_code;

/// Domain prefix placed in front of every code.
pub const DEFAULT_PREFIX: &str = "NIET.ly";

/// A display-only short link, `<prefix>/<code>`.
///
/// Nothing is registered behind it; it never resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    prefix: String,
    code: String,
}

impl ShortLink {
    pub fn new(prefix: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            code: code.into(),
        }
    }

    /// Build a link with a freshly generated code of `length` characters.
    pub fn generate<R: Rng + ?Sized>(prefix: &str, length: usize, rng: &mut R) -> Self {
        Self::new(prefix, generate_code(rng, length))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ShortLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.prefix, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{CODE_LENGTH, is_short_code};
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_display() {
        let link = ShortLink::new(DEFAULT_PREFIX, "Ab3dE9");
        assert_eq!(link.to_string(), "NIET.ly/Ab3dE9");
    }

    #[test]
    fn test_generate_uses_rng() {
        let link = ShortLink::generate(DEFAULT_PREFIX, CODE_LENGTH, &mut StepRng::new(0, 0));
        assert_eq!(link.code(), "AAAAAA");
        assert_eq!(link.prefix(), "NIET.ly");
        assert!(is_short_code(link.code(), CODE_LENGTH));
    }
}
