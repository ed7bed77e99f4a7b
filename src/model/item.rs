//! Core dispatch item types.

use super::owner::Owner;

/// What kind of attention a dispatch item is asking for.
///
/// The set is open: a feed may carry kinds this build does not know about,
/// so unknown strings are preserved verbatim as [`ItemKind::Other`] rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    /// Something the recipient is asked to do.
    Action,
    /// Something to read.
    Read,
    /// A message waiting for an answer.
    Reply,
    /// Any kind this build does not recognize.
    Other(String),
}

impl ItemKind {
    /// The lowercase string form used in serialized records.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Action => "action",
            Self::Read => "read",
            Self::Reply => "reply",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ItemKind {
    fn from(raw: &str) -> Self {
        match raw {
            "action" => Self::Action,
            "read" => Self::Read,
            "reply" => Self::Reply,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ItemKind {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single mail/dispatch item shown on the dashboard.
///
/// Items are immutable once constructed: the controller hands the view an
/// ordered slice and never mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DispatchItem {
    /// Free-form short description.
    pub title: String,

    /// Who the item belongs to.
    pub owner: Owner,

    /// Relative weight used for display emphasis. No range is enforced.
    pub importance: u8,

    /// Kind of attention requested.
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// The fixed records the dashboard starts with.
pub fn sample_items() -> Vec<DispatchItem> {
    let owner = Owner::new("Hunter Leah", "e9abd41f117ce7e267885a9a3bc98f0c");
    vec![
        DispatchItem {
            title: "Could you do this?".to_string(),
            owner: owner.clone(),
            importance: 6,
            kind: ItemKind::Action,
        },
        DispatchItem {
            title: "Read this!".to_string(),
            owner: owner.clone(),
            importance: 3,
            kind: ItemKind::Read,
        },
        DispatchItem {
            title: "Reply needed!".to_string(),
            owner,
            importance: 5,
            kind: ItemKind::Reply,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_known_strings() {
        assert_eq!(ItemKind::from("action"), ItemKind::Action);
        assert_eq!(ItemKind::from("read"), ItemKind::Read);
        assert_eq!(ItemKind::from("reply"), ItemKind::Reply);
    }

    #[test]
    fn test_kind_unknown_string_preserved() {
        let kind = ItemKind::from("escalate");
        assert_eq!(kind, ItemKind::Other("escalate".to_string()));
        assert_eq!(kind.as_str(), "escalate");
    }

    #[test]
    fn test_kind_case_sensitive() {
        // Kinds are stored lowercase; anything else is an unknown kind.
        assert_eq!(ItemKind::from("Action"), ItemKind::Other("Action".to_string()));
    }

    #[test]
    fn test_item_serializes_kind_as_type() {
        let item = DispatchItem {
            title: "Read this!".to_string(),
            owner: Owner::new("Hunter Leah", "e9abd41f117ce7e267885a9a3bc98f0c"),
            importance: 3,
            kind: ItemKind::Read,
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["type"], "read");
        assert_eq!(json["importance"], 3);
        assert_eq!(json["owner"]["name"], "Hunter Leah");
    }

    #[test]
    fn test_item_deserializes_from_record_shape() {
        let raw = r#"{
            "title": "Could you do this?",
            "owner": {"name": "Hunter Leah", "gravatar": "e9abd41f117ce7e267885a9a3bc98f0c"},
            "importance": 6,
            "type": "action"
        }"#;
        let item: DispatchItem = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(item.kind, ItemKind::Action);
        assert_eq!(item.importance, 6);
    }

    #[test]
    fn test_sample_items_shape() {
        let items = sample_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].kind, ItemKind::Action);
        assert_eq!(items[1].kind, ItemKind::Read);
        assert_eq!(items[2].kind, ItemKind::Reply);
        assert!(items.iter().all(|i| i.owner.name == "Hunter Leah"));
    }
}
