use crate::value::{Color, LinearDimension, Property};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: Property,
    pub value: Cow<'static, str>,
}

impl Declaration {
    pub fn new(property: Property, value: impl fmt::Display) -> Self {
        Self { property, value: Cow::Owned(value.to_string()) }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Builder methods shared by everything that collects declarations.
pub trait Declare: Sized {
    fn push_declaration(&mut self, declaration: Declaration);

    #[must_use]
    fn declare(mut self, property: Property, value: impl fmt::Display) -> Self {
        self.push_declaration(Declaration::new(property, value));
        self
    }

    #[must_use]
    fn max_width(self, value: LinearDimension) -> Self {
        self.declare(Property::MaxWidth, value)
    }

    #[must_use]
    fn margin(self, value: LinearDimension) -> Self {
        self.declare(Property::Margin, value)
    }

    #[must_use]
    fn padding(self, value: LinearDimension) -> Self {
        self.declare(Property::Padding, value)
    }

    #[must_use]
    fn background_color(self, value: impl Into<Color>) -> Self {
        self.declare(Property::BackgroundColor, value.into())
    }
}

/// A named, reusable block of declarations.
///
/// Fragments are shared through [`Arc`]; a [`RuleSet`] that includes one keeps
/// a reference and expands it only when the sheet is flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFragment {
    name: Cow<'static, str>,
    declarations: Vec<Declaration>,
}

impl StyleFragment {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), declarations: Vec::new() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

impl Declare for StyleFragment {
    fn push_declaration(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Declaration(Declaration),
    Fragment(Arc<StyleFragment>),
}

/// Declarations bound to a selector, plus nested rule sets.
///
/// A nested selector is resolved against its parent: plain selectors become
/// descendants (`img` under `body` is `body img`) and `&` is replaced with the
/// parent (`&:hover`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    selector: Cow<'static, str>,
    entries: Vec<Entry>,
    children: Vec<RuleSet>,
}

impl RuleSet {
    #[must_use]
    pub fn new(selector: impl Into<Cow<'static, str>>) -> Self {
        Self { selector: selector.into(), entries: Vec::new(), children: Vec::new() }
    }

    /// Composes `fragment` at this position in the declaration order.
    #[must_use]
    pub fn include(mut self, fragment: &Arc<StyleFragment>) -> Self {
        self.entries.push(Entry::Fragment(Arc::clone(fragment)));
        self
    }

    #[must_use]
    pub fn nest(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Fragments included directly by this rule set.
    pub fn fragments(&self) -> impl Iterator<Item = &Arc<StyleFragment>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Fragment(fragment) => Some(fragment),
            Entry::Declaration(_) => None,
        })
    }

    /// Own declarations with included fragments expanded in place.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter().flat_map(|entry| match entry {
            Entry::Declaration(declaration) => std::slice::from_ref(declaration).iter(),
            Entry::Fragment(fragment) => fragment.declarations().iter(),
        })
    }

    pub(crate) fn resolve_selector(&self, parent: Option<&str>) -> String {
        let Some(parent) = parent else {
            return self.selector.to_string();
        };

        let mut resolved = Vec::new();
        for outer in parent.split(',').map(str::trim) {
            for inner in self.selector.split(',').map(str::trim) {
                if inner.contains('&') {
                    resolved.push(inner.replace('&', outer));
                } else {
                    resolved.push(format!("{outer} {inner}"));
                }
            }
        }
        resolved.join(", ")
    }
}

impl Declare for RuleSet {
    fn push_declaration(&mut self, declaration: Declaration) {
        self.entries.push(Entry::Declaration(declaration));
    }
}
