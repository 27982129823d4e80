//! Bridge context — what the host tool tells a plugin about where it runs.
//!
//! The host supplies environment, feature flags, credentials, tenant, the
//! current navigation path and validation results alongside the event
//! stream. They are carried as one explicit value instead of ambient
//! lookups so that anything rendering them can be built without a host.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host-provided context for a plugin session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeContext {
    /// Deployment environment, e.g. `prod`, `stage`, `dev`.
    pub environment: String,
    /// Feature flags as a JSON object.
    pub flags: Map<String, Value>,
    pub access_token: Option<String>,
    pub org_id: Option<String>,
    pub tenant: Option<String>,
    /// Current navigation path in the host.
    pub navigation: Option<String>,
    /// Validation results keyed by validation id.
    pub validation: Map<String, Value>,
}

impl BridgeContext {
    /// Build a render-safe summary of this context.
    #[must_use]
    pub fn summarize(&self, event_count: usize) -> BridgeSummary {
        BridgeSummary {
            environment: self.environment.clone(),
            flags: Value::Object(self.flags.clone()).to_string(),
            access_token: self.access_token.as_deref().map(mask_token),
            org_id: self.org_id.clone(),
            tenant: self.tenant.clone(),
            navigation: self.navigation.clone(),
            event_count,
            validation_count: self.validation.len(),
        }
    }
}

/// Display projection of a [`BridgeContext`]. The access token is masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeSummary {
    pub environment: String,
    /// Flags serialized as compact JSON.
    pub flags: String,
    pub access_token: Option<String>,
    pub org_id: Option<String>,
    pub tenant: Option<String>,
    pub navigation: Option<String>,
    pub event_count: usize,
    pub validation_count: usize,
}

/// Replace all but the last four characters of `token` with `*`.
///
/// Tokens of four characters or fewer are fully masked.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let tail: String = token.chars().skip(len - 4).collect();
    format!("{}{tail}", "*".repeat(len - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_mask_all_but_last_four_characters() {
        assert_eq!(mask_token("abcdef123456"), "********3456");
    }

    #[test]
    fn should_fully_mask_short_tokens() {
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token(""), "");
    }

    #[test]
    fn should_summarize_context_with_counts() {
        let mut context = BridgeContext {
            environment: "stage".to_string(),
            access_token: Some("secret-token".to_string()),
            tenant: Some("acme".to_string()),
            ..BridgeContext::default()
        };
        context.flags.insert("beta".to_string(), json!(true));
        context.validation.insert("v1".to_string(), json!({}));
        context.validation.insert("v2".to_string(), json!({}));

        let summary = context.summarize(7);

        assert_eq!(summary.environment, "stage");
        assert_eq!(summary.flags, r#"{"beta":true}"#);
        assert_eq!(summary.access_token.as_deref(), Some("********oken"));
        assert_eq!(summary.tenant.as_deref(), Some("acme"));
        assert_eq!(summary.event_count, 7);
        assert_eq!(summary.validation_count, 2);
    }

    #[test]
    fn should_render_empty_flags_as_empty_object() {
        let summary = BridgeContext::default().summarize(0);
        assert_eq!(summary.flags, "{}");
        assert!(summary.access_token.is_none());
    }

    #[test]
    fn should_deserialize_partial_context() {
        let context: BridgeContext =
            serde_json::from_value(json!({"environment": "dev", "orgId": "org@1"})).unwrap();
        assert_eq!(context.environment, "dev");
        assert_eq!(context.org_id.as_deref(), Some("org@1"));
        assert!(context.flags.is_empty());
    }
}
