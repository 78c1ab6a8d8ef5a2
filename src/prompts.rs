pub const QUICK_SUMMARY: &str = include_str!("../data/prompts/quick_summary.txt");
pub const CHAT_SYSTEM: &str = include_str!("../data/prompts/chat_system.txt");
pub const NEARBY_CHARITIES: &str = include_str!("../data/prompts/nearby_charities.txt");
pub const POSTER: &str = include_str!("../data/prompts/poster.txt");
pub const ANALYZE_PHOTO: &str = include_str!("../data/prompts/analyze_photo.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Summarize {{topic}}.", &[("topic", "clean water")]),
            "Summarize clean water."
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("near {{lat}}, {{lng}}", &[("lat", "12.9"), ("lng", "77.5")]),
            "near 12.9, 77.5"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!QUICK_SUMMARY.is_empty());
        assert!(!CHAT_SYSTEM.is_empty());
        assert!(!NEARBY_CHARITIES.is_empty());
        assert!(!POSTER.is_empty());
        assert!(!ANALYZE_PHOTO.is_empty());
    }

    #[test]
    fn test_quick_summary_has_topic_placeholder() {
        assert!(QUICK_SUMMARY.contains("{{topic}}"));
    }

    #[test]
    fn test_nearby_charities_has_coordinate_placeholders() {
        assert!(NEARBY_CHARITIES.contains("{{lat}}"));
        assert!(NEARBY_CHARITIES.contains("{{lng}}"));
    }

    #[test]
    fn test_poster_has_prompt_placeholder() {
        assert!(POSTER.contains("{{prompt}}"));
    }
}
