// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embed snippet generator.
//!
//! Produces a static, self-contained markup+script fragment that a
//! third-party page pastes in verbatim. The fragment declares a
//! container element, loads the hosted runtime script, and on load calls
//! the global `ReviewSyncWidget.init(containerId, config)` entry point
//! with an inline JSON config of the shape
//! `{businessId, placeId, theme, ...settings}`.
//!
//! The fragment carries no secrets; re-embedding on one page is safe as
//! long as container ids stay unique per instance.

use reviewsync_core::WidgetSettings;

/// Default CDN location of the hosted runtime script.
pub const DEFAULT_SCRIPT_URL: &str = "https://cdn.reviewsync.com/widget.js";

/// Prefix for generated DOM container ids.
const CONTAINER_PREFIX: &str = "reviewsync-widget";

/// Where the embed runtime lives. Injected into the lifecycle service so
/// the script origin is configuration, never a hidden global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    pub script_url: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
        }
    }
}

/// Everything the generator needs about one widget.
#[derive(Debug, Clone)]
pub struct EmbedContext<'a> {
    pub business_id: i64,
    pub place_id: &'a str,
    /// Persisted record id, when the widget already exists. Keeps the
    /// container id stable across regenerations.
    pub record_id: Option<i64>,
    pub settings: &'a WidgetSettings,
}

/// The DOM container id for a widget: derived from the record id when
/// available, otherwise from the current time (pre-persist only).
pub fn container_id(record_id: Option<i64>) -> String {
    match record_id {
        Some(id) => format!("{CONTAINER_PREFIX}-{id}"),
        None => format!(
            "{CONTAINER_PREFIX}-{}",
            chrono::Utc::now().timestamp_millis()
        ),
    }
}

/// The inline config object the runtime receives:
/// `{businessId, placeId, theme, ...all settings fields}`.
pub fn inline_config(ctx: &EmbedContext<'_>) -> serde_json::Value {
    let mut config = serde_json::Map::new();
    config.insert("businessId".to_string(), ctx.business_id.into());
    config.insert("placeId".to_string(), ctx.place_id.into());
    for (key, value) in ctx.settings.to_map() {
        config.insert(key, value);
    }
    serde_json::Value::Object(config)
}

/// Generate the distributable embed fragment.
pub fn generate(options: &EmbedOptions, ctx: &EmbedContext<'_>) -> String {
    let container = container_id(ctx.record_id);
    let config = inline_config(ctx);
    // to_string_pretty cannot fail for a plain JSON value.
    let config_json =
        serde_json::to_string_pretty(&config).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"<!-- ReviewSync Widget -->
<div id="{container}"></div>
<script>
  (function() {{
    var config = {config_json};
    var script = document.createElement('script');
    script.src = '{script_url}';
    script.onload = function() {{
      ReviewSyncWidget.init('{container}', config);
    }};
    document.head.appendChild(script);
  }})();
</script>"#,
        script_url = options.script_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> WidgetSettings {
        let mut s = WidgetSettings::default();
        s.max_reviews = 5;
        s.accent_color = "#34a853".to_string();
        s
    }

    fn extract_config(fragment: &str) -> serde_json::Value {
        let start = fragment
            .find("var config = ")
            .expect("fragment declares a config")
            + "var config = ".len();
        let end = fragment[start..]
            .find(";\n")
            .expect("config assignment is terminated");
        serde_json::from_str(&fragment[start..start + end]).expect("inline config parses")
    }

    #[test]
    fn container_id_is_stable_for_persisted_records() {
        assert_eq!(container_id(Some(42)), "reviewsync-widget-42");
        assert_eq!(container_id(Some(42)), container_id(Some(42)));
    }

    #[test]
    fn container_id_without_record_uses_the_prefix() {
        let id = container_id(None);
        assert!(id.starts_with("reviewsync-widget-"));
        assert!(id.len() > "reviewsync-widget-".len());
    }

    #[test]
    fn inline_config_reproduces_ids_and_settings_exactly() {
        let s = settings();
        let ctx = EmbedContext {
            business_id: 42,
            place_id: "abc",
            record_id: Some(1),
            settings: &s,
        };
        let fragment = generate(&EmbedOptions::default(), &ctx);
        let config = extract_config(&fragment);

        assert_eq!(config["businessId"], json!(42));
        assert_eq!(config["placeId"], json!("abc"));

        let mut expected = serde_json::Map::new();
        expected.insert("businessId".to_string(), json!(42));
        expected.insert("placeId".to_string(), json!("abc"));
        for (k, v) in s.to_map() {
            expected.insert(k, v);
        }
        assert_eq!(config, serde_json::Value::Object(expected));
    }

    #[test]
    fn fragment_declares_container_and_loads_the_runtime() {
        let s = settings();
        let ctx = EmbedContext {
            business_id: 7,
            place_id: "pl",
            record_id: Some(9),
            settings: &s,
        };
        let fragment = generate(&EmbedOptions::default(), &ctx);

        assert!(fragment.contains(r#"<div id="reviewsync-widget-9"></div>"#));
        assert!(fragment.contains("script.src = 'https://cdn.reviewsync.com/widget.js'"));
        assert!(fragment.contains("ReviewSyncWidget.init('reviewsync-widget-9', config)"));
    }

    #[test]
    fn custom_script_url_is_respected() {
        let s = settings();
        let ctx = EmbedContext {
            business_id: 7,
            place_id: "pl",
            record_id: Some(9),
            settings: &s,
        };
        let options = EmbedOptions {
            script_url: "https://cdn.example.net/rs.js".to_string(),
        };
        let fragment = generate(&options, &ctx);
        assert!(fragment.contains("script.src = 'https://cdn.example.net/rs.js'"));
    }

    #[test]
    fn theme_changes_show_up_in_the_config() {
        let mut s = settings();
        s.theme = reviewsync_core::Theme::Minimal;
        let ctx = EmbedContext {
            business_id: 1,
            place_id: "p",
            record_id: Some(2),
            settings: &s,
        };
        let config = extract_config(&generate(&EmbedOptions::default(), &ctx));
        assert_eq!(config["theme"], json!("minimal"));
    }
}
