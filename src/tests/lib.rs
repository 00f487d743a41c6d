use super::{process_css, Report, Stylesheet, TocOptions, LINE_ENDING};
use crate::formats::css::CssFormat;
use crate::transform::NO_INSERTION_WARNING;

fn css(text: &str) -> String {
    text.replace('\n', LINE_ENDING)
}

fn source() -> String {
    css("/* --- csstoc --- */

/*
---
# Layout
---
*/
.grid { display: grid; }

@media print {
/*
---
## Print tweaks
---
*/
  .grid { display: block; }
}

/*
---
# buttons
---
*/
")
}

#[test]
fn test_process_css_rewrites_placeholder() {
    let mut report = Report::default();
    let (sheet, summary) = process_css(&source(), &TocOptions::default(), &mut report).unwrap();
    let output = sheet.to_css();

    assert_eq!(summary.headings, 3);
    assert_eq!(summary.placeholders, 1);
    assert!(summary.rewritten);

    let block = css("/* --- csstoc ---

Table of Contents
=================

- Layout
-- Print tweaks
- Buttons

--- csstoc --- */");
    assert!(report.warnings.is_empty());
    assert!(output.starts_with(&block), "unexpected output:\n{output}");
    assert!(output.ends_with(&source()[20..]));
}

#[test]
fn test_process_css_is_stable_on_its_own_output() {
    let options = TocOptions::default();
    let once = process_css(&source(), &options, &mut Report::default())
        .unwrap()
        .0
        .to_css();
    let twice = process_css(&once, &options, &mut Report::default())
        .unwrap()
        .0
        .to_css();

    assert_eq!(once, twice);
}

#[test]
fn test_indented_fence_is_not_a_heading() {
    let input = css("/* --- csstoc --- */
.a {
  /*
  ---
  # Indented
  ---
  */
}
");
    let mut report = Report::default();
    let (sheet, summary) = process_css(&input, &TocOptions::default(), &mut report).unwrap();

    assert_eq!(summary.headings, 0);
    // The closing fence keeps its indentation, so the comment is not fenced.
    assert_eq!(report.messages(), vec![crate::transform::NO_LINES_WARNING]);
    assert_eq!(sheet.to_css(), input);
}

#[test]
fn test_process_css_nested_placeholder() {
    let input = css("@media screen {
  /* --- csstoc --- */
}
/*
---
# Only
---
*/
");
    let (sheet, summary) =
        process_css(&input, &TocOptions::default(), &mut Report::default()).unwrap();

    assert_eq!(summary.placeholders, 1);

    assert!(sheet.to_css().contains(&css("- Only\n\n--- csstoc --- */")));
}

#[test]
fn test_process_css_without_placeholder_leaves_source() {
    let input = css("/*
---
# Orphan
---
*/
a { color: red; }
");
    let mut report = Report::default();
    let (sheet, summary) = process_css(&input, &TocOptions::default(), &mut report).unwrap();

    assert_eq!(report.messages(), vec![NO_INSERTION_WARNING]);
    assert!(!summary.rewritten);
    assert_eq!(sheet.to_css(), input);
    assert_eq!(sheet, Stylesheet::parse(input.as_str(), &CssFormat).unwrap());
}
