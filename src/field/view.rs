//! Rendering for the validation field.

use super::model::Model;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders title, bordered input with status icon, and error message.
    pub fn view(&self) -> String {
        let look = self.appearance();
        let mut lines = Vec::new();

        if !self.title.is_empty() {
            lines.push(self.styles.title.render(&self.title));
        }

        let mut input_style = Style::new()
            .border_style(lipgloss::normal_border())
            .border_foreground(Color::from(look.border_color.as_str()))
            .padding(0, 1, 0, 1);
        if !look.background_color.is_empty() {
            input_style = input_style.background(Color::from(look.background_color.as_str()));
        }
        let boxed = input_style.render(&self.input_view(&look.text_color));

        let glyph = self.styles.icon_glyph(look.icon);
        let row = if glyph.is_empty() {
            boxed
        } else {
            let icon = Style::new()
                .foreground(Color::from(look.border_color.as_str()))
                .render(glyph);
            // Leading newline lines the icon up with the text row of the box.
            let icon_column = format!("\n {icon}");
            lipgloss::join_horizontal(lipgloss::TOP, &[boxed.as_str(), icon_column.as_str()])
        };
        lines.push(row);

        if look.error_visible {
            lines.push(self.styles.error.render(&self.error_message()));
        }

        lines.join("\n")
    }

    /// Characters as they are shown: masked for password kinds.
    pub(super) fn display_chars(&self) -> Vec<char> {
        if self.kind.is_secure() {
            vec![self.echo_character; self.value.len()]
        } else {
            self.value.clone()
        }
    }

    fn input_view(&self, text_color: &str) -> String {
        let text_style = Style::new().foreground(Color::from(text_color));

        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let shown = self.visible_window();
        let (start, chars) = (shown.0, &shown.1);
        let caret = self.pos - start;

        let mut v = String::new();
        let before: String = chars[..caret.min(chars.len())].iter().collect();
        v.push_str(&text_style.render(&before));

        let used = if self.focus {
            let mut cur = self.cursor.clone();
            let under = chars.get(caret).copied().unwrap_or(' ');
            cur.set_char(&under.to_string());
            v.push_str(&cur.view());
            if caret + 1 < chars.len() {
                let after: String = chars[caret + 1..].iter().collect();
                v.push_str(&text_style.render(&after));
            }
            let shown_str: String = chars.iter().collect();
            shown_str.width() + usize::from(caret >= chars.len())
        } else {
            if caret < chars.len() {
                let after: String = chars[caret..].iter().collect();
                v.push_str(&text_style.render(&after));
            }
            let shown_str: String = chars.iter().collect();
            shown_str.width()
        };

        if self.width > used {
            v.push_str(&" ".repeat(self.width - used));
        }
        v
    }

    // Scrolls so the caret stays inside `width` cells.
    fn visible_window(&self) -> (usize, Vec<char>) {
        let chars = self.display_chars();
        if self.width == 0 || chars.len() < self.width {
            return (0, chars);
        }
        // One cell is reserved for the caret at the end of the text.
        let room = self.width.saturating_sub(1).max(1);
        let start = self.pos.saturating_sub(room);
        let end = (start + self.width).min(chars.len());
        (start, chars[start..end].to_vec())
    }

    fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let mut v = String::new();
        let rest: String = if self.focus {
            let mut cur = self.cursor.clone();
            cur.set_char(&chars.next().unwrap_or(' ').to_string());
            v.push_str(&cur.view());
            chars.collect()
        } else {
            chars.collect()
        };
        v.push_str(&self.styles.placeholder.render(&rest));

        let used = self.placeholder.width();
        if self.width > used {
            v.push_str(&" ".repeat(self.width - used));
        }
        v
    }
}
