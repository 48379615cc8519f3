//! Landing page rendering.

use crate::config::AppConfig;

const TEMPLATE: &str = include_str!("../../templates/index.html");

/// Landing page HTML, rendered once from configuration at startup
#[derive(Clone, Debug)]
pub struct LandingPage {
    html: String,
}

impl LandingPage {
    pub fn render(config: &AppConfig) -> Self {
        let html = TEMPLATE
            .replace("{{SHOP_NAME}}", &escape_html(&config.shop_name))
            .replace("{{LIFF_ID}}", &escape_html(&config.liff_id))
            .replace("{{GEOFENCE_METERS}}", &config.geofence_meters.to_string());

        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
