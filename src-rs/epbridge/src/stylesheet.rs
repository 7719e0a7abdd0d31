use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const WARNING_COLOR: Style = Style::new().yellow();
pub const INFO_COLOR: Style = Style::new().cyan();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();

pub const RECORD_TYPE: Style = Style::new().bold();
pub const FIELD_COMMENT: Style = Style::new().dimmed();

pub const OBJECT_KIND: Style = Style::new().green().bold();
pub const OBJECT_NAME: Style = Style::new().bold();
pub const FIELD_NAME: Style = Style::new().cyan();
pub const DEFAULTED_VALUE: Style = Style::new().dimmed();
pub const TREE_BRANCH: Style = Style::new().dimmed();

/// Removes the escape sequences added by the styles above.
#[cfg(test)]
pub fn strip_styles(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (false, c) => plain.push(c),
            (true, _) => {}
        }
    }
    plain
}
