use serde::{Deserialize, Serialize};

use crate::shared::patch::AbsentPolicy;
use crate::shared::singleton::SingletonDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub border_radius: String,
    pub transition_speed: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#915EFF".to_string(),
            secondary_color: "#aaa6c3".to_string(),
            accent_color: "#00cea8".to_string(),
            background_color: "#050816".to_string(),
            text_color: "#ffffff".to_string(),
            font_family: "Poppins, sans-serif".to_string(),
            border_radius: "8px".to_string(),
            transition_speed: "0.3s".to_string(),
        }
    }
}

impl SingletonDocument for Theme {
    const KIND: &'static str = "theme";
    const LABEL: &'static str = "Theme";

    fn bootstrap() -> Self {
        Theme::default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeUpdate {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
    pub border_radius: Option<String>,
    pub transition_speed: Option<String>,
}

impl ThemeUpdate {
    pub fn apply(self, theme: &mut Theme) {
        let keep = |input: Option<String>, current: &mut String| {
            *current = AbsentPolicy::Keep.resolve(input, std::mem::take(current));
        };

        keep(self.primary_color, &mut theme.primary_color);
        keep(self.secondary_color, &mut theme.secondary_color);
        keep(self.accent_color, &mut theme.accent_color);
        keep(self.background_color, &mut theme.background_color);
        keep(self.text_color, &mut theme.text_color);
        keep(self.font_family, &mut theme.font_family);
        keep(self.border_radius, &mut theme.border_radius);
        keep(self.transition_speed, &mut theme.transition_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_update_keeps_other_scalars() {
        let mut theme = Theme::default();
        let update: ThemeUpdate =
            serde_json::from_value(json!({ "primaryColor": "#ff0000", "unknown": 1 })).unwrap();

        update.apply(&mut theme);

        assert_eq!(theme.primary_color, "#ff0000");
        assert_eq!(theme.font_family, Theme::default().font_family);
    }

    #[test]
    fn serializes_eight_camel_case_scalars() {
        let json = serde_json::to_value(Theme::default()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 8);
        assert!(obj.contains_key("transitionSpeed"));
    }
}
