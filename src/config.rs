//! Explorer configuration.

use serde::Deserialize;

use crate::graph::style::DECLUTTER_THRESHOLD;

/// Explorer tuning knobs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
	/// Graphs with more nodes than this start without their parentless nodes.
	pub declutter_threshold: usize,
	/// Shortest query, after trimming, that runs a search.
	pub min_search_len: usize,
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			declutter_threshold: DECLUTTER_THRESHOLD,
			min_search_len: 2,
		}
	}
}

impl ExplorerConfig {
	/// Read overrides from JSON; missing keys keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_keep_the_literal_threshold() {
		let config = ExplorerConfig::default();
		assert_eq!(config.declutter_threshold, 1000);
		assert_eq!(config.min_search_len, 2);
	}

	#[test]
	fn partial_json_overrides_only_what_it_names() {
		let config = ExplorerConfig::from_json(r#"{ "min_search_len": 4 }"#).expect("valid config");
		assert_eq!(config.min_search_len, 4);
		assert_eq!(config.declutter_threshold, 1000);
	}

	#[test]
	fn rejects_wrong_types() {
		assert!(ExplorerConfig::from_json(r#"{ "declutter_threshold": "lots" }"#).is_err());
	}
}
