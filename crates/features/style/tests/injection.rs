use skalable_style::{
    Injection, Property, StyleError, StyleHost, apply_global_style, global_styles, inject_global,
};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Head {
    styles: BTreeMap<String, String>,
    inserts: usize,
}

impl StyleHost for Head {
    fn has_global_style(&self, id: &str) -> bool {
        self.styles.contains_key(id)
    }

    fn insert_global_style(&mut self, id: &str, css: &str) -> Result<(), StyleError> {
        self.inserts += 1;
        self.styles.insert(id.to_owned(), css.to_owned());
        Ok(())
    }
}

#[derive(Debug)]
struct ReadOnlyHead;

impl StyleHost for ReadOnlyHead {
    fn has_global_style(&self, _id: &str) -> bool {
        false
    }

    fn insert_global_style(&mut self, _id: &str, _css: &str) -> Result<(), StyleError> {
        Err(StyleError::Host { message: "document head is read-only".into(), context: None })
    }
}

#[test]
fn first_application_inserts_the_rendered_sheet() -> Result<(), StyleError> {
    let mut head = Head::default();

    assert_eq!(apply_global_style(&mut head)?, Injection::Inserted);
    assert_eq!(head.inserts, 1);

    let css = head.styles.get("GlobalStyles").expect("sheet stored under its name");
    assert_eq!(css, &global_styles().render());
    assert!(css.contains("padding: 100px;"));
    Ok(())
}

#[test]
fn repeated_application_does_not_duplicate() -> Result<(), StyleError> {
    let mut head = Head::default();

    apply_global_style(&mut head)?;
    assert_eq!(apply_global_style(&mut head)?, Injection::AlreadyPresent);
    assert_eq!(apply_global_style(&mut head)?, Injection::AlreadyPresent);

    assert_eq!(head.inserts, 1);
    assert_eq!(head.styles.len(), 1);
    Ok(())
}

#[test]
fn host_failures_propagate() {
    let err = apply_global_style(&mut ReadOnlyHead).expect_err("insert refused");
    assert!(matches!(err, StyleError::Host { .. }));
    assert_eq!(err.to_string(), "Style host error: document head is read-only");
}

#[test]
fn sheets_with_distinct_names_coexist() -> Result<(), StyleError> {
    use skalable_style::{Declare, RuleSet, StyleSheet, px};

    let mut head = Head::default();
    let print = StyleSheet::new("PrintStyles").rule(RuleSet::new("body").padding(px(0)));

    apply_global_style(&mut head)?;
    assert_eq!(inject_global(&mut head, &print)?, Injection::Inserted);
    assert_eq!(head.styles.len(), 2);
    assert_eq!(print.lookup("body", Property::Padding), Some("0px"));
    Ok(())
}
