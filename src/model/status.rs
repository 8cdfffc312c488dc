use std::fmt;

/// A player's attendance response. Closed set — anything else is rejected
/// at the registry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

impl RsvpStatus {
    /// Case-sensitive parse of the exact wire strings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(RsvpStatus::Yes),
            "No" => Some(RsvpStatus::No),
            "Maybe" => Some(RsvpStatus::Maybe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Yes => "Yes",
            RsvpStatus::No => "No",
            RsvpStatus::Maybe => "Maybe",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_closed_set() {
        assert_eq!(RsvpStatus::parse("Yes"), Some(RsvpStatus::Yes));
        assert_eq!(RsvpStatus::parse("No"), Some(RsvpStatus::No));
        assert_eq!(RsvpStatus::parse("Maybe"), Some(RsvpStatus::Maybe));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(RsvpStatus::parse("yes"), None);
        assert_eq!(RsvpStatus::parse("Accepted"), None);
        assert_eq!(RsvpStatus::parse(""), None);
        assert_eq!(RsvpStatus::parse(" Yes"), None);
    }
}
