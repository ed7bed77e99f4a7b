//! Item owner: display name plus avatar lookup key.

/// The person a dispatch item belongs to.
///
/// `gravatar` is an opaque hash string; resolving it to an actual avatar
/// image is left to whatever renders the item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Owner {
    /// Human-readable display name.
    pub name: String,
    /// Opaque avatar-image lookup key.
    pub gravatar: String,
}

impl Owner {
    /// Create an owner from a name and a gravatar hash.
    pub fn new(name: impl Into<String>, gravatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gravatar: gravatar.into(),
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_name_only() {
        let owner = Owner::new("Hunter Leah", "e9abd41f117ce7e267885a9a3bc98f0c");
        assert_eq!(owner.to_string(), "Hunter Leah");
    }

    #[test]
    fn test_serde_roundtrip() {
        let owner = Owner::new("Hunter Leah", "e9abd41f117ce7e267885a9a3bc98f0c");
        let json = serde_json::to_string(&owner).expect("serialize");
        let parsed: Owner = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, owner);
    }
}
