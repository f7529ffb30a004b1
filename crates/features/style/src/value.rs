use std::fmt;
use strum_macros::{AsRefStr, Display, EnumString};

/// CSS property names, rendered in kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Property {
    MaxWidth,
    MinWidth,
    Width,
    Height,
    Margin,
    Padding,
    BackgroundColor,
    Color,
    Display,
}

/// Lengths and the sizing keywords accepted where CSS expects one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinearDimension {
    Auto,
    MaxContent,
    MinContent,
    FitContent,
    Zero,
    Px(u32),
    Percent(f32),
    Em(f32),
}

impl fmt::Display for LinearDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::MaxContent => f.write_str("max-content"),
            Self::MinContent => f.write_str("min-content"),
            Self::FitContent => f.write_str("fit-content"),
            Self::Zero => f.write_str("0"),
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Em(v) => write!(f, "{v}em"),
        }
    }
}

/// Pixel length, `px(100)` renders `100px`.
#[must_use]
pub const fn px(value: u32) -> LinearDimension {
    LinearDimension::Px(value)
}

#[must_use]
pub const fn pct(value: f32) -> LinearDimension {
    LinearDimension::Percent(value)
}

/// Subset of the CSS named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    Gray,
    DarkGray,
    LightGray,
    Transparent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const DARK_GRAY: Self = Self::Named(NamedColor::DarkGray);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(name: NamedColor) -> Self {
        Self::Named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn properties_render_kebab_case() {
        assert_eq!(Property::MaxWidth.to_string(), "max-width");
        assert_eq!(Property::BackgroundColor.as_ref(), "background-color");
        assert_eq!(Property::from_str("padding").ok(), Some(Property::Padding));
    }

    #[test]
    fn dimensions_render_css_units() {
        assert_eq!(px(100).to_string(), "100px");
        assert_eq!(pct(50.0).to_string(), "50%");
        assert_eq!(LinearDimension::MaxContent.to_string(), "max-content");
        assert_eq!(LinearDimension::Auto.to_string(), "auto");
        assert_eq!(LinearDimension::Em(1.5).to_string(), "1.5em");
    }

    #[test]
    fn colors_render_names_and_hex() {
        assert_eq!(Color::DARK_GRAY.to_string(), "darkgray");
        assert_eq!(Color::Rgb(169, 169, 169).to_string(), "#a9a9a9");
    }
}
