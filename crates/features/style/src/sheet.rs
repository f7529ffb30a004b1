use crate::rule::{Declaration, RuleSet};
use crate::value::Property;
use std::borrow::Cow;
use std::fmt;

/// A named stylesheet. The name identifies it once injected into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    name: Cow<'static, str>,
    rules: Vec<RuleSet>,
}

/// A rule set after nesting has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRule<'a> {
    pub selector: String,
    pub declarations: Vec<&'a Declaration>,
}

impl StyleSheet {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), rules: Vec::new() }
    }

    #[must_use]
    pub fn rule(mut self, rule: RuleSet) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &[RuleSet] {
        &self.rules
    }

    /// Depth-first, parents before children, source order otherwise.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatRule<'_>> {
        let mut out = Vec::new();
        for rule in &self.rules {
            flatten_into(rule, None, &mut out);
        }
        out
    }

    /// Value of `property` for an exact flattened `selector`; later declarations win.
    #[must_use]
    pub fn lookup(&self, selector: &str, property: Property) -> Option<&str> {
        self.flatten()
            .into_iter()
            .filter(|rule| rule.selector == selector)
            .flat_map(|rule| rule.declarations)
            .filter(|declaration| declaration.property == property)
            .last()
            .map(|declaration| declaration.value.as_ref())
    }

    /// Plain CSS text. Rules without declarations are skipped.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn flatten_into<'a>(rule: &'a RuleSet, parent: Option<&str>, out: &mut Vec<FlatRule<'a>>) {
    let selector = rule.resolve_selector(parent);
    out.push(FlatRule { selector: selector.clone(), declarations: rule.declarations().collect() });
    for child in rule.children() {
        flatten_into(child, Some(&selector), out);
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.flatten().iter().filter(|rule| !rule.declarations.is_empty()) {
            writeln!(f, "{} {{", rule.selector)?;
            for declaration in &rule.declarations {
                writeln!(f, "  {declaration}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Declare, StyleFragment};
    use crate::value::{LinearDimension, px};
    use std::sync::Arc;

    #[test]
    fn nested_rules_render_as_descendant_selectors() {
        let paragraph = RuleSet::new("p").margin(LinearDimension::Zero);
        let sheet =
            StyleSheet::new("Demo").rule(RuleSet::new("main").padding(px(10)).nest(paragraph));

        assert_eq!(sheet.render(), "main {\n  padding: 10px;\n}\nmain p {\n  margin: 0;\n}\n");
    }

    #[test]
    fn empty_rules_are_not_rendered() {
        let fragment = Arc::new(StyleFragment::new("wide").max_width(px(900)));
        let sheet = StyleSheet::new("Demo")
            .rule(RuleSet::new("section").nest(RuleSet::new("article").include(&fragment)));

        assert_eq!(sheet.render(), "section article {\n  max-width: 900px;\n}\n");
        assert_eq!(sheet.flatten().len(), 2);
    }

    #[test]
    fn lookup_prefers_the_last_declaration() {
        let sheet = StyleSheet::new("Demo")
            .rule(RuleSet::new("body").padding(px(1)))
            .rule(RuleSet::new("body").padding(px(2)));

        assert_eq!(sheet.lookup("body", Property::Padding), Some("2px"));
        assert_eq!(sheet.lookup("body", Property::Margin), None);
        assert_eq!(sheet.lookup("html", Property::Padding), None);
    }
}
