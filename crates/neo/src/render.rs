// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal formatting for console output.
//!
//! Every function returns plain lines; color is applied through `colored`
//! and switched off globally for `--plain` or non-TTY output.

use colored::Colorize;
use neo_core::Timestamp;
use neo_core::model::{ChatChannel, ChatMessage, Priority, StatusCounts, Task, TaskStatus};
use neo_router::DayCalendar;
use neo_store::ChannelView;

const PREVIEW_WIDTH: usize = 48;

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

pub fn header(title: &str) -> Vec<String> {
    vec![
        String::new(),
        format!("  {}", title.bold()),
        format!("  {}", "-".repeat(40)),
    ]
}

/// One row of the channel list.
pub fn channel_row(
    channel: &ChatChannel,
    preview: Option<&str>,
    muted: bool,
    calendar: &DayCalendar,
    now: Timestamp,
) -> String {
    let icon = channel.icon.as_deref().unwrap_or(if channel.is_dm() { "👤" } else { "#" });
    let time = channel
        .last_time
        .map(|ts| calendar.channel_time_label(ts, now))
        .unwrap_or_default();
    let badge = match (muted, channel.unread) {
        (true, _) => "muted".dimmed().to_string(),
        (false, 0) => String::new(),
        (false, n) => format!("({n})").green().bold().to_string(),
    };
    let preview = truncate(preview.unwrap_or(""), PREVIEW_WIDTH);
    format!(
        "  {icon} {:<6} {:<24} {:>9}  {badge}\n      {}",
        channel.id.as_str().dimmed(),
        channel.name.bold(),
        time,
        preview.dimmed()
    )
}

fn message_line(message: &ChatMessage) -> String {
    let time = message.timestamp.format("%H:%M");
    if message.is_system() {
        return format!("    {} {}", time.to_string().dimmed(), message.text.cyan());
    }
    if message.deleted {
        return format!(
            "    {} {}: {}",
            time.to_string().dimmed(),
            message.user_name,
            "message deleted".italic().dimmed()
        );
    }
    let mut line = format!(
        "    {} {}: {}",
        time.to_string().dimmed(),
        message.user_name.bold(),
        message.text
    );
    if message.edited {
        line.push_str(&format!(" {}", "(edited)".dimmed()));
    }
    if message.pinned {
        line.push_str(" 📌");
    }
    if !message.reactions.is_empty() {
        let reactions: Vec<String> = message
            .reactions
            .iter()
            .map(|r| format!("{} {}", r.emoji, r.count))
            .collect();
        line.push_str(&format!("  [{}]", reactions.join(" ")));
    }
    line
}

/// The full timeline of one channel view, with day separators and the
/// unread divider.
pub fn channel_view(view: &ChannelView) -> Vec<String> {
    let mut lines = header(view.name());
    let divider = view.divider();
    let mut index = 0;

    for bucket in view.date_buckets() {
        lines.push(format!("  ── {} ──", view.render_label(&bucket).bold()));
        for message in bucket.entries {
            if divider == Some(index) {
                lines.push(format!("  {}", "── New messages ──".red()));
            }
            if let Some(quote) = &message.reply_to {
                lines.push(format!(
                    "      {} {}",
                    format!("↳ {}:", quote.user_name).dimmed(),
                    truncate(&quote.text, PREVIEW_WIDTH).dimmed()
                ));
            }
            lines.push(message_line(message));
            index += 1;
        }
    }

    if view.entries().is_empty() {
        lines.push(format!("  {}", "No messages yet".dimmed()));
    }
    let pinned = view.pinned().len();
    if pinned > 0 {
        lines.push(String::new());
        lines.push(format!("  📌 {pinned} pinned"));
    }
    lines
}

fn status_cell(status: TaskStatus) -> String {
    match status {
        TaskStatus::Open => "open".red().to_string(),
        TaskStatus::InProgress => "in progress".yellow().to_string(),
        TaskStatus::Done => "done".green().to_string(),
    }
}

pub fn task_row(task: &Task) -> String {
    let priority = match task.priority {
        Priority::High => "!".red().bold().to_string(),
        Priority::Medium => " ".to_string(),
        Priority::Low => "·".dimmed().to_string(),
    };
    let group = if task.group.is_missing() {
        "(no group)".to_string()
    } else {
        task.group.name.clone()
    };
    format!(
        "  {priority} {:<5} {:<44} {:<22} {}",
        task.id.as_str().dimmed(),
        truncate(&task.title, 44),
        truncate(&group, 22),
        status_cell(task.status)
    )
}

pub fn status_summary(counts: &StatusCounts) -> String {
    format!(
        "  {} open · {} in progress · {} done ({} total)",
        counts.red.to_string().red(),
        counts.yellow.to_string().yellow(),
        counts.green.to_string().green(),
        counts.total()
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use neo_core::model::{GroupSnapshot, NewTask};

    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Pool pump", 20), "Pool pump");
        assert_eq!(truncate("Pool pump maintenance", 9), "Pool pum…");
        assert_eq!(truncate("ÄÖÜäöü", 3), "ÄÖ…");
    }

    #[test]
    fn task_row_shows_snapshot_group() {
        plain();
        let ts = Utc.with_ymd_and_hms(2026, 6, 11, 9, 0, 0).unwrap();
        let task = NewTask::new("t1", "Replace breaker", "g3", ts)
            .with_priority(Priority::High)
            .into_task(GroupSnapshot {
                name: "Electrical".into(),
                color: "#f59e0b".into(),
            });
        let row = task_row(&task);
        assert!(row.contains("Electrical"));
        assert!(row.contains("open"));
        assert!(row.trim_start().starts_with('!'));
    }

    #[test]
    fn muted_channel_shows_no_count() {
        plain();
        let ts = Utc.with_ymd_and_hms(2026, 6, 11, 9, 0, 0).unwrap();
        let mut channel = ChatChannel::group("ch1", "General");
        channel.unread = 4;
        let calendar = DayCalendar::default();
        assert!(channel_row(&channel, None, true, &calendar, ts).contains("muted"));
        assert!(channel_row(&channel, None, false, &calendar, ts).contains("(4)"));
    }

    #[test]
    fn summary_lists_all_buckets() {
        plain();
        let counts = StatusCounts {
            red: 2,
            yellow: 1,
            green: 3,
        };
        assert_eq!(
            status_summary(&counts),
            "  2 open · 1 in progress · 3 done (6 total)"
        );
    }
}
