use chrono::Utc;
use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::view::{Card, CardState, View};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

/// Format the derived view as a card list for the terminal. The
/// no-results state renders its own line rather than empty output.
pub fn render_view(view: &View<'_>) -> String {
    match view {
        View::NoResults => "No items match the current filters.".dimmed().to_string(),
        View::Cards(cards) => {
            let mut out = String::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&render_card(card));
            }
            out
        }
    }
}

fn render_card(card: &Card<'_>) -> String {
    let item = card.item;
    let kind_tag = format!("[{}]", item.kind);
    let time_ago = format_time_ago(item.created_at);

    let fixed = 2 + kind_tag.width() + 1 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title = truncate_to_width(&item.title, available);
    let padding = available.saturating_sub(title.width());

    let title_line = format!(
        "  {}{} {} {}",
        title.bold(),
        " ".repeat(padding),
        kind_tag.cyan(),
        time_ago.dimmed()
    );

    let mut lines = vec![title_line];
    lines.push(format!("  {}", item.description));
    if !item.details.is_empty() {
        lines.push(format!("  {}", item.details.dimmed()));
    }

    let status = match card.state {
        CardState::Displayed => format!("  id {}", item.id).dimmed().to_string(),
        CardState::PendingDelete => format!("  id {} (deleting…)", item.id).red().to_string(),
    };
    lines.push(status);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::view::Workspace;
    use crate::model::{Item, ItemKind, NewItem};

    fn item(title: &str, kind: ItemKind) -> Item {
        Item::new(NewItem {
            title: title.to_string(),
            kind,
            description: "desc".to_string(),
            details: String::new(),
        })
    }

    #[test]
    fn no_results_renders_distinct_message() {
        colored::control::set_override(false);
        let rendered = render_view(&View::NoResults);
        assert!(rendered.contains("No items match"));
    }

    #[test]
    fn cards_render_title_kind_and_id() {
        colored::control::set_override(false);
        let workspace = Workspace::new(vec![item("Rust", ItemKind::Skill)]);
        let rendered = render_view(&workspace.view());
        assert!(rendered.contains("Rust"));
        assert!(rendered.contains("[Skill]"));
        assert!(rendered.contains("id "));
    }

    #[test]
    fn truncation_appends_ellipsis() {
        let long = "a".repeat(200);
        let truncated = truncate_to_width(&long, 20);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() <= 20);
    }
}
