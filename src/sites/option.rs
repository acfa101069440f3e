//! Player options offered by a site and the outcome of choosing one.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identity of a site option (e.g. `conquer_mine`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub Cow<'static, str>);

impl OptionId {
    /// Create an option ID from a static string.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self(Cow::Owned(id.to_string()))
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A presented player action.
///
/// `enabled` is computed once, when the option list is generated. After
/// any state change the caller asks the board for a fresh list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub id: OptionId,
    pub label: String,
    pub enabled: bool,
}

impl SiteOption {
    #[must_use]
    pub fn new(id: OptionId, label: impl Into<String>, enabled: bool) -> Self {
        Self {
            id,
            label: label.into(),
            enabled,
        }
    }
}

/// Option list. Sites offer one or two options in practice.
pub type SiteOptions = SmallVec<[SiteOption; 2]>;

/// Uniform outcome of executing an option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    /// Player-facing message.
    pub message: String,
}

impl ActionResult {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_id_equality_ignores_storage() {
        const STATIC: OptionId = OptionId::from_static("collect_crystal");
        assert_eq!(STATIC, OptionId::from("collect_crystal"));
        assert_eq!(STATIC.to_string(), "collect_crystal");
    }

    #[test]
    fn test_action_result_constructors() {
        let ok = ActionResult::ok("fine");
        assert!(ok.success);
        assert_eq!(ok.message, "fine");

        let fail = ActionResult::fail("nope");
        assert!(!fail.success);
    }
}
