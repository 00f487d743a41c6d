use super::{transform, NO_INSERTION_WARNING, NO_LINES_WARNING};
use crate::diagnostics::Report;
use crate::options::TocOptions;
use crate::stylesheet::{Block, Comment, Node, NodePath, Stylesheet};
use crate::LINE_ENDING;
use proptest::prelude::*;

const ID: &str = "--- csstoc ---";

fn lines(rows: &[&str]) -> String {
    rows.join(LINE_ENDING)
}

fn comment(text: &str) -> Node {
    Node::Comment(Comment::new(text))
}

fn heading(title: &str) -> Node {
    comment(&lines(&["---", title, "---"]))
}

fn rule(nodes: Vec<Node>) -> Node {
    Node::Block(Block {
        kind: "rule_set".to_string(),
        span: 0..0,
        nodes,
    })
}

fn text_at(sheet: &Stylesheet, path: &[usize]) -> String {
    sheet
        .comment(&NodePath::from(path.to_vec()))
        .map(|c| c.text.clone())
        .unwrap_or_default()
}

fn expected_outline(body: &[&str]) -> String {
    let mut rows = vec![ID, "", "Table of Contents", "=================", ""];
    rows.extend_from_slice(body);
    rows.extend_from_slice(&["", ID]);
    lines(&rows)
}

#[test]
fn test_outline_written_into_placeholder() {
    let mut sheet = Stylesheet::from_nodes(vec![
        comment(ID),
        heading("# Intro"),
        rule(vec![]),
        heading("## Details"),
    ]);
    let mut report = Report::default();

    let summary = transform(&mut sheet, &mut report, &TocOptions::default());

    assert!(report.warnings.is_empty(), "{:?}", report.messages());
    assert_eq!(summary.headings, 2);
    assert_eq!(summary.placeholders, 1);
    assert!(summary.rewritten);
    assert_eq!(
        text_at(&sheet, &[0]),
        expected_outline(&["- Intro", "-- Details"])
    );
    // Heading comments themselves are untouched.
    assert_eq!(text_at(&sheet, &[1]), lines(&["---", "# Intro", "---"]));
}

#[test]
fn test_second_run_is_stable() {
    let mut sheet = Stylesheet::from_nodes(vec![
        comment(ID),
        heading("# Intro"),
        heading("## Details"),
    ]);
    let options = TocOptions::default();

    transform(&mut sheet, &mut Report::default(), &options);
    let first = sheet.clone();

    let mut report = Report::default();
    let summary = transform(&mut sheet, &mut report, &options);

    assert_eq!(summary.headings, 2);
    assert_eq!(summary.placeholders, 1);
    assert!(report.warnings.is_empty());
    assert_eq!(sheet, first);
}

#[test]
fn test_generated_block_would_pass_the_filter() {
    // The block is fenced by dash-led identifier lines, so only the identifier check
    // keeps it from being read back as a heading.
    let options = TocOptions::default();
    let block = expected_outline(&["- Intro"]);

    assert!((options.text_filter)(&Comment::new(block.clone()), &options));
    assert!(Comment::new(block).first_line().contains(ID));
}

#[test]
fn test_placeholder_without_headings() {
    let mut sheet = Stylesheet::from_nodes(vec![comment(ID), comment("just a note")]);
    let before = sheet.clone();
    let mut report = Report::default();

    let summary = transform(&mut sheet, &mut report, &TocOptions::default());

    assert_eq!(report.messages(), vec![NO_LINES_WARNING]);
    assert_eq!(report.warnings[0].node, Some(NodePath::root()));
    assert!(!summary.rewritten);
    assert_eq!(sheet, before);
}

#[test]
fn test_headings_without_placeholder() {
    let mut sheet = Stylesheet::from_nodes(vec![heading("# Intro"), heading("# Outro")]);
    let before = sheet.clone();
    let mut report = Report::default();

    let summary = transform(&mut sheet, &mut report, &TocOptions::default());

    assert_eq!(report.messages(), vec![NO_INSERTION_WARNING]);
    assert_eq!(summary.headings, 2);
    assert_eq!(summary.placeholders, 0);
    assert_eq!(sheet, before);
}

#[test]
fn test_empty_stylesheet_reports_both() {
    let mut sheet = Stylesheet::default();
    let mut report = Report::default();

    transform(&mut sheet, &mut report, &TocOptions::default());

    assert_eq!(
        report.messages(),
        vec![NO_LINES_WARNING, NO_INSERTION_WARNING]
    );
}

#[test]
fn test_every_placeholder_gets_the_same_outline() {
    let mut sheet = Stylesheet::from_nodes(vec![
        comment(ID),
        heading("# Only"),
        rule(vec![comment(&format!("{ID} again"))]),
    ]);

    let summary = transform(&mut sheet, &mut Report::default(), &TocOptions::default());

    assert_eq!(summary.placeholders, 2);
    let expected = expected_outline(&["- Only"]);
    assert_eq!(text_at(&sheet, &[0]), expected);
    assert_eq!(text_at(&sheet, &[2, 0]), expected);
}

#[test]
fn test_identifier_wins_over_heading_shape() {
    let both = lines(&[ID, "# Looks like a heading", "---"]);
    let mut sheet = Stylesheet::from_nodes(vec![comment(&both), heading("# Real")]);

    let summary = transform(&mut sheet, &mut Report::default(), &TocOptions::default());

    assert_eq!(summary.headings, 1);
    assert_eq!(summary.placeholders, 1);
    assert_eq!(text_at(&sheet, &[0]), expected_outline(&["- Real"]));
}

#[test]
fn test_identifier_only_checked_on_first_line() {
    let later = lines(&["---", "# Mentions", ID, "---"]);
    let mut sheet = Stylesheet::from_nodes(vec![comment(&later)]);
    let mut report = Report::default();

    let summary = transform(&mut sheet, &mut report, &TocOptions::default());

    assert_eq!(summary.headings, 1);
    assert_eq!(summary.placeholders, 0);
    assert_eq!(report.messages(), vec![NO_INSERTION_WARNING]);
}

#[test]
fn test_nested_headings_keep_document_order() {
    let mut sheet = Stylesheet::from_nodes(vec![
        heading("# One"),
        rule(vec![heading("## Two"), rule(vec![heading("### Three")])]),
        heading("# Four"),
        comment(ID),
    ]);

    transform(&mut sheet, &mut Report::default(), &TocOptions::default());

    assert_eq!(
        text_at(&sheet, &[3]),
        expected_outline(&["- One", "-- Two", "--- Three", "- Four"])
    );
}

#[test]
fn test_custom_identifier_and_pad() {
    let options = TocOptions {
        pad_depth_char: "=".to_string(),
        block_identifier: "<toc>".to_string(),
        ..TocOptions::default()
    };
    let mut sheet = Stylesheet::from_nodes(vec![comment("<toc>"), heading("## Grid")]);

    transform(&mut sheet, &mut Report::default(), &options);

    assert_eq!(
        text_at(&sheet, &[0]),
        lines(&["<toc>", "", "Table of Contents", "=================", "", "== Grid", "", "<toc>"])
    );
}

#[test]
fn test_custom_filter_and_formatter() {
    fn starred(comment: &Comment, _options: &TocOptions) -> bool {
        comment.text.starts_with('*')
    }
    fn bullet(comment: &Comment, _options: &TocOptions) -> String {
        format!("* {}", comment.text.trim_start_matches('*').trim())
    }
    let options = TocOptions {
        text_filter: starred,
        text_formatter: bullet,
        ..TocOptions::default()
    };
    let mut sheet = Stylesheet::from_nodes(vec![
        comment(ID),
        comment("* Colors"),
        heading("# Ignored by this filter"),
        comment("** Spacing"),
    ]);

    transform(&mut sheet, &mut Report::default(), &options);

    assert_eq!(
        text_at(&sheet, &[0]),
        expected_outline(&["* Colors", "* Spacing"])
    );
}

proptest! {
    #[test]
    fn prop_rerun_never_changes_output(
        entries in prop::collection::vec((1usize..4, "[A-Za-z][A-Za-z ]{0,12}"), 1..6),
    ) {
        let mut nodes = vec![comment(ID)];
        for (depth, title) in &entries {
            nodes.push(heading(&format!("{} {title}", "#".repeat(*depth))));
        }
        let mut sheet = Stylesheet::from_nodes(nodes);
        let options = TocOptions::default();

        let first = transform(&mut sheet, &mut Report::default(), &options);
        let once = sheet.clone();
        let second = transform(&mut sheet, &mut Report::default(), &options);

        prop_assert_eq!(first, second);
        prop_assert_eq!(second.headings, entries.len());
        prop_assert_eq!(sheet, once);
    }
}
