//! Configuration templates for `snip init`.
//!
//! The templates live in `templates/` as plain TOML so tests can parse them.
//! `snip init` writes them commented out, leaving every default in effect.

/// Project `.snip.toml` template.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// `~/.snip.toml` template.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Local template for `snip init`, with every setting commented out.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Global template for `snip init --global`, with every setting commented out.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Turns settings and section headers into comments. Existing comments and
/// blank lines pass through unchanged.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| match line {
            "" => "\n".to_string(),
            l if l.starts_with('#') => format!("{l}\n"),
            l => format!("# {l}\n"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn local_template_parses_as_valid_toml() {
        let result = parse_config(LOCAL_TEMPLATE);
        assert!(result.is_ok(), "local template failed to parse: {result:?}");
    }

    #[test]
    fn global_template_parses_as_valid_toml() {
        let result = parse_config(GLOBAL_TEMPLATE);
        assert!(
            result.is_ok(),
            "global template failed to parse: {result:?}"
        );
    }

    #[test]
    fn commented_templates_parse_as_empty() {
        let config = parse_config(&local_template()).unwrap();
        assert!(config.excerpt.is_none());
        assert!(config.corpus.is_none());
        assert!(config.keywords.is_none());
    }

    #[test]
    fn comment_template_preserves_comments_and_blank_lines() {
        let input = "# comment\n\n[section]\nkey = \"value\"\n";
        let result = comment_template(input);
        assert_eq!(result, "# comment\n\n# [section]\n# key = \"value\"\n");
    }
}
