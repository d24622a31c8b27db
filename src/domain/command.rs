//! Command token value object

/// A single user-typed command, split into its base name and repeat count.
///
/// A trailing `*<N>` suffix requests N sends of the resolved signal. The
/// suffix is stripped only when N is a well-formed positive integer; anything
/// else (`x*0`, `x*-1`, `x*`, a count too large to represent) leaves the
/// token untouched and the whole text is looked up literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToken {
    base: String,
    repeat: u32,
}

impl CommandToken {
    /// Parse a raw token, splitting off a valid repeat suffix if present.
    pub fn parse(raw: &str) -> Self {
        if let Some((base, digits)) = raw.rsplit_once('*') {
            if !base.is_empty() && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
            {
                if let Ok(n) = digits.parse::<u32>() {
                    if n >= 1 {
                        return Self {
                            base: base.to_string(),
                            repeat: n,
                        };
                    }
                }
            }
        }

        Self {
            base: raw.to_string(),
            repeat: 1,
        }
    }

    /// The name looked up in the signal store
    pub fn base(&self) -> &str {
        &self.base
    }

    /// How many times the resolved signal is sent
    pub fn repeat(&self) -> u32 {
        self.repeat
    }
}
