use crate::diff::Diff;
use ansi_term::{Color, Style};
use std::fmt::{Display, Formatter, Result};

/// Struct used to adjust the formatting of an edit script
///
/// Renders a script inline, with deleted text in `[-..-]` markers and
/// inserted text in `{+..+}` markers, optionally styled with color.
#[derive(Debug)]
pub struct DiffFormatter {
    with_color: bool,

    equal: Style,
    delete: Style,
    insert: Style,
}

impl DiffFormatter {
    /// Construct a new formatter
    pub fn new() -> Self {
        Self {
            with_color: false,

            equal: Style::new(),
            delete: Color::Red.normal(),
            insert: Color::Green.normal(),
        }
    }

    /// Enable formatting with color
    pub fn with_color(mut self) -> Self {
        self.with_color = true;
        self
    }

    /// Returns a `Display` impl which can be used to print an edit script
    pub fn fmt_diffs<'a>(&'a self, diffs: &'a [Diff]) -> impl Display + 'a {
        ScriptDisplay { f: self, diffs }
    }
}

impl Default for DiffFormatter {
    fn default() -> Self {
        Self::new()
    }
}

struct ScriptDisplay<'a> {
    f: &'a DiffFormatter,
    diffs: &'a [Diff],
}

impl Display for ScriptDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for diff in self.diffs {
            let (open, close, style) = match diff {
                Diff::Equal(_) => ("", "", self.f.equal),
                Diff::Delete(_) => ("[-", "-]", self.f.delete),
                Diff::Insert(_) => ("{+", "+}", self.f.insert),
            };

            write!(f, "{}", open)?;
            if self.f.with_color {
                write!(f, "{}{}{}", style.prefix(), diff.text(), style.suffix())?;
            } else {
                write!(f, "{}", diff.text())?;
            }
            write!(f, "{}", close)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_markers() {
        let diffs = vec![
            Diff::equal("fruit flies "),
            Diff::delete("like"),
            Diff::insert("eat"),
            Diff::equal(" a banana"),
        ];
        let rendered = DiffFormatter::new().fmt_diffs(&diffs).to_string();
        assert_eq!(rendered, "fruit flies [-like-]{+eat+} a banana");
    }
}
