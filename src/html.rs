//! HTML rendering of an edit script

use crate::diff::Diff;

/// Renders an edit script as an HTML fragment.
///
/// Inserted text is wrapped in `<ins>`, deleted text in `<del>`, and
/// shared text in `<span>`; segment text is HTML-escaped.
pub fn pretty_html(diffs: &[Diff]) -> String {
    let mut html = String::new();
    for diff in diffs {
        let text = escape(diff.text());
        match diff {
            Diff::Insert(_) => {
                html.push_str("<ins style='background:#e6ffe6;'>");
                html.push_str(&text);
                html.push_str("</ins>");
            }
            Diff::Delete(_) => {
                html.push_str("<del style='background:#ffe6e6;'>");
                html.push_str(&text);
                html.push_str("</del>");
            }
            Diff::Equal(_) => {
                html.push_str("<span>");
                html.push_str(&text);
                html.push_str("</span>");
            }
        }
    }
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_by_kind() {
        let diffs = vec![
            Diff::equal("a\n"),
            Diff::delete("b"),
            Diff::insert("c"),
        ];
        assert_eq!(
            pretty_html(&diffs),
            "<span>a\n</span>\
             <del style='background:#ffe6e6;'>b</del>\
             <ins style='background:#e6ffe6;'>c</ins>"
        );
    }

    #[test]
    fn escapes_markup() {
        let diffs = vec![Diff::equal("<&>")];
        assert_eq!(pretty_html(&diffs), "<span>&lt;&amp;&gt;</span>");
    }
}
