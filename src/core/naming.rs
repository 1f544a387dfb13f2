//! File name conventions: recognising source images by suffix and building the
//! names of their derived variants.

pub const SIZE_PLACEHOLDER: &str = "{size}";

/// Return the part of `file_name` before `suffix`, if the name ends with it.
pub fn source_stem<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    file_name.strip_suffix(suffix)
}

pub fn render_template(template: &str, size: u32) -> String {
    template.replace(SIZE_PLACEHOLDER, &size.to_string())
}

/// Name of the variant of `stem` at `size`, e.g. `("icon", "_{size}.png", 48)` -> `icon_48.png`.
pub fn derived_file_name(stem: &str, template: &str, size: u32) -> String {
    format!("{}{}", stem, render_template(template, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_trailing_suffix() {
        assert_eq!(source_stem("icon_64.png", "_64.png"), Some("icon"));
        assert_eq!(source_stem("icon_64.png.bak", "_64.png"), None);
        assert_eq!(source_stem("icon_48.png", "_64.png"), None);
        assert_eq!(source_stem("readme.txt", "_64.png"), None);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(source_stem("icon_64.PNG", "_64.png"), None);
    }

    #[test]
    fn bare_suffix_has_empty_stem() {
        assert_eq!(source_stem("_64.png", "_64.png"), Some(""));
    }

    #[test]
    fn derived_names_follow_template() {
        assert_eq!(derived_file_name("icon", "_{size}.png", 48), "icon_48.png");
        assert_eq!(derived_file_name("a_64.png_b", "_{size}.png", 16), "a_64.png_b_16.png");
        assert_eq!(derived_file_name("icon", "@{size}x{size}.png", 24), "icon@24x24.png");
    }
}
