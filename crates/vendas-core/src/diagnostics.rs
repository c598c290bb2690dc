//! Environment diagnostics.
//!
//! Reports which of the dashboard's configuration values are set without ever
//! holding on to their contents.

use std::collections::HashMap;
use std::env;

use serde::Serialize;

use crate::util::normalize_text_option;

/// Configuration values the dashboard's document store client needs
pub const ENV_KEYS: [&str; 6] = [
    "FIREBASE_API_KEY",
    "FIREBASE_AUTH_DOMAIN",
    "FIREBASE_PROJECT_ID",
    "FIREBASE_STORAGE_BUCKET",
    "FIREBASE_MESSAGING_SENDER_ID",
    "FIREBASE_APP_ID",
];

/// Presence report for a fixed set of configuration names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvReport {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl EnvReport {
    /// Check [`ENV_KEYS`] against the process environment
    pub fn from_env() -> Self {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(&ENV_KEYS, |name| values.get(name).cloned())
    }

    /// Check `keys` against an arbitrary lookup; blank values count as missing
    pub fn from_lookup(keys: &[&str], lookup: impl Fn(&str) -> Option<String>) -> Self {
        let (present, missing): (Vec<&str>, Vec<&str>) = keys
            .iter()
            .copied()
            .partition(|key| normalize_text_option(lookup(key)).is_some());

        let report = Self {
            present: present.into_iter().map(str::to_string).collect(),
            missing: missing.into_iter().map(str::to_string).collect(),
        };
        tracing::debug!(
            present = report.present.len(),
            missing = report.missing.len(),
            "Checked environment configuration"
        );
        report
    }

    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn reports_missing_keys_in_declaration_order() {
        let lookup = lookup_from(&[
            ("FIREBASE_PROJECT_ID", "vendas-prod"),
            ("FIREBASE_API_KEY", "secret-key"),
        ]);

        let report = EnvReport::from_lookup(&ENV_KEYS, lookup);

        assert_eq!(
            report.present,
            vec!["FIREBASE_API_KEY".to_string(), "FIREBASE_PROJECT_ID".to_string()]
        );
        assert_eq!(
            report.missing,
            vec![
                "FIREBASE_AUTH_DOMAIN".to_string(),
                "FIREBASE_STORAGE_BUCKET".to_string(),
                "FIREBASE_MESSAGING_SENDER_ID".to_string(),
                "FIREBASE_APP_ID".to_string(),
            ]
        );
        assert!(!report.all_present());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let report = EnvReport::from_lookup(&["A", "B"], lookup_from(&[("A", "   "), ("B", "x")]));
        assert_eq!(report.missing, vec!["A".to_string()]);
        assert_eq!(report.present, vec!["B".to_string()]);
    }

    #[test]
    fn report_never_contains_values() {
        let report = EnvReport::from_lookup(
            &["FIREBASE_API_KEY"],
            lookup_from(&[("FIREBASE_API_KEY", "super-secret-value")]),
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(report.all_present());
        assert!(!json.contains("super-secret-value"));
        assert!(!format!("{report:?}").contains("super-secret-value"));
    }
}
