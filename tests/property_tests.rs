//! Property tests over generated documents.

use markdown2html::inline::{md5_hex, transform};
use markdown2html::{convert, convert_with_options, Options};
use proptest::prelude::*;

/// Lines without any inline markers or list/heading prefixes.
fn plain_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?]{0,24}"
}

/// Lines drawn from every block kind.
fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![
        plain_line(),
        plain_line().prop_map(|s| format!("- {s}")),
        plain_line().prop_map(|s| format!("* {s}")),
        (1usize..=6, plain_line()).prop_map(|(n, s)| format!("{} {s}", "#".repeat(n))),
        Just(String::new()),
    ]
}

fn count(html: &[String], line: &str) -> usize {
    html.iter().filter(|l| *l == line).count()
}

proptest! {
    #[test]
    fn output_covers_non_blank_lines(lines in prop::collection::vec(plain_line(), 0..20)) {
        let html = convert(&lines);
        let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();
        prop_assert!(html.len() >= non_blank);
    }

    #[test]
    fn containers_are_balanced(
        lines in prop::collection::vec(any_line(), 0..30),
        closes_lists in any::<bool>(),
    ) {
        let options = Options { blank_line_closes_lists: closes_lists, ..Options::default() };
        let html = convert_with_options(&lines, &options);
        for tag in ["ul", "ol", "p"] {
            prop_assert_eq!(
                count(&html, &format!("<{tag}>")),
                count(&html, &format!("</{tag}>"))
            );
        }
    }

    #[test]
    fn consecutive_items_share_one_list(items in prop::collection::vec(plain_line(), 1..10)) {
        let lines: Vec<String> = items.iter().map(|s| format!("- {s}")).collect();
        let html = convert(&lines);
        prop_assert_eq!(count(&html, "<ul>"), 1);
        prop_assert_eq!(count(&html, "</ul>"), 1);
        prop_assert_eq!(html.len(), items.len() + 2);
    }

    #[test]
    fn plain_text_unchanged(text in plain_line()) {
        prop_assert_eq!(transform(&text), text);
    }

    #[test]
    fn hash_matches_digest(content in "[a-z ]{1,16}") {
        let result = transform(&format!("[[{content}]]"));
        prop_assert_eq!(result.len(), 32);
        prop_assert_eq!(result, md5_hex(&content));
    }

    #[test]
    fn strip_removes_only_c(content in "[a-zA-Z ]{1,16}") {
        let result = transform(&format!("(({content}))"));
        let expected: String = content.chars().filter(|&ch| ch != 'c' && ch != 'C').collect();
        prop_assert_eq!(result, expected);
    }
}
