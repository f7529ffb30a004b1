use crate::rule::{Declare, RuleSet, StyleFragment};
use crate::sheet::StyleSheet;
use crate::value::{Color, LinearDimension, px};
use skalable_domain::constants::GLOBAL_STYLE_ID;
use std::sync::{Arc, LazyLock};

static BASE_IMG: LazyLock<Arc<StyleFragment>> =
    LazyLock::new(|| Arc::new(StyleFragment::new("baseImg").max_width(px(500))));

static GLOBAL_STYLES: LazyLock<StyleSheet> = LazyLock::new(|| {
    StyleSheet::new(GLOBAL_STYLE_ID).rule(
        RuleSet::new("body")
            // only one body, so these apply page-wide
            .max_width(LinearDimension::MaxContent)
            .margin(LinearDimension::Auto)
            .padding(px(100))
            .background_color(Color::DARK_GRAY)
            .nest(RuleSet::new("img").include(&BASE_IMG)),
    )
});

/// Base image sizing, shared by every rule that includes it.
#[must_use]
pub fn base_img() -> &'static Arc<StyleFragment> {
    &BASE_IMG
}

/// The page's global stylesheet, built on first use and never mutated.
#[must_use]
pub fn global_styles() -> &'static StyleSheet {
    &GLOBAL_STYLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Property;

    #[test]
    fn body_rules_match_the_page_layout() {
        let sheet = global_styles();
        assert_eq!(sheet.name(), "GlobalStyles");
        assert_eq!(sheet.lookup("body", Property::MaxWidth), Some("max-content"));
        assert_eq!(sheet.lookup("body", Property::Margin), Some("auto"));
        assert_eq!(sheet.lookup("body", Property::Padding), Some("100px"));
        assert_eq!(sheet.lookup("body", Property::BackgroundColor), Some("darkgray"));
    }

    #[test]
    fn body_img_takes_its_width_from_base_img() {
        let sheet = global_styles();
        assert_eq!(sheet.lookup("body img", Property::MaxWidth), Some("500px"));

        let body = &sheet.rules()[0];
        let img = &body.children()[0];
        let included: Vec<_> = img.fragments().collect();
        assert_eq!(included.len(), 1);
        assert!(Arc::ptr_eq(included[0], base_img()));
        assert_eq!(base_img().name(), "baseImg");
    }

    #[test]
    fn rendered_css_has_no_standalone_fragment_rule() {
        let css = global_styles().render();
        assert_eq!(
            css,
            "body {\n  max-width: max-content;\n  margin: auto;\n  padding: 100px;\n  \
             background-color: darkgray;\n}\nbody img {\n  max-width: 500px;\n}\n"
        );
        assert_eq!(css.matches("max-width: 500px").count(), 1);
        assert!(!css.contains("baseImg"));
    }
}
