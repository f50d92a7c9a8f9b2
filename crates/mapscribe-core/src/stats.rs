//! Statistics reported alongside an exported outline.

use serde::{Deserialize, Serialize};

/// Summary of one outline pass.
///
/// `normal` counts nodes reached from the root through resolved links;
/// `missing_names` lists, in extraction order, the nodes that had to be
/// recovered afterwards.
///
/// Serializes with the keys `total`, `normal`, `missing` and `missingNames`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    pub total: usize,
    pub normal: usize,
    pub missing: usize,
    pub missing_names: Vec<String>,
}

impl ExportStats {
    /// Creates stats where `missing` is derived from `missing_names`.
    pub fn new(total: usize, normal: usize, missing_names: Vec<String>) -> Self {
        Self {
            total,
            normal,
            missing: missing_names.len(),
            missing_names,
        }
    }

    /// Whether every node was reached from the root.
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counts_missing_names() {
        let stats = ExportStats::new(4, 3, vec!["D".to_string()]);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.normal, 3);
        assert_eq!(stats.missing, 1);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let stats = ExportStats::new(2, 1, vec!["Lost".to_string()]);
        let json = serde_json::to_string(&stats).unwrap();

        assert_eq!(
            json,
            r#"{"total":2,"normal":1,"missing":1,"missingNames":["Lost"]}"#
        );
    }
}
