// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar-day labels for date separators and channel list timestamps.

use std::fmt::{self, Write};

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};
use neo_config::model::ChatConfig;
use neo_core::Timestamp;
use neo_core::model::ChatMessage;
use tracing::warn;

/// Label of the calendar day a message falls on, relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayLabel {
    Today,
    Yesterday,
    Date(NaiveDate),
}

/// Local calendar used to decide which day a timestamp belongs to.
#[derive(Debug, Clone)]
pub struct DayCalendar {
    offset: FixedOffset,
    date_format: String,
}

impl DayCalendar {
    pub fn new(offset: FixedOffset, date_format: impl Into<String>) -> Self {
        Self {
            offset,
            date_format: date_format.into(),
        }
    }

    /// Build from the `[chat]` config section. An out-of-range offset
    /// falls back to UTC.
    pub fn from_config(config: &ChatConfig) -> Self {
        let offset = config
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(
                    minutes = config.utc_offset_minutes,
                    "utc offset out of range, using UTC"
                );
                Utc.fix()
            });
        Self::new(offset, config.date_format.clone())
    }

    pub fn local_date(&self, ts: Timestamp) -> NaiveDate {
        ts.with_timezone(&self.offset).date_naive()
    }

    pub fn label(&self, ts: Timestamp, now: Timestamp) -> DayLabel {
        let day = self.local_date(ts);
        let today = self.local_date(now);
        if day == today {
            DayLabel::Today
        } else if Some(day) == today.pred_opt() {
            DayLabel::Yesterday
        } else {
            DayLabel::Date(day)
        }
    }

    /// Human-readable separator text for `label`.
    pub fn render(&self, label: DayLabel) -> String {
        match label {
            DayLabel::Today => "Today".to_string(),
            DayLabel::Yesterday => "Yesterday".to_string(),
            DayLabel::Date(date) => {
                let mut out = String::new();
                if write!(out, "{}", date.format(&self.date_format)).is_ok() {
                    out
                } else {
                    warn!(format = %self.date_format, "date format cannot render a date, using %F");
                    date.format("%F").to_string()
                }
            }
        }
    }

    /// Short timestamp for a channel list row.
    ///
    /// `HH:MM` for today, `Yesterday`, the weekday name for other days of
    /// the current Monday-based week, otherwise `Mon D`.
    pub fn channel_time_label(&self, ts: Timestamp, now: Timestamp) -> String {
        let local = ts.with_timezone(&self.offset);
        let day = local.date_naive();
        let today = self.local_date(now);
        let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let week_end = week_start + Duration::days(6);

        if day == today {
            local.format("%H:%M").to_string()
        } else if Some(day) == today.pred_opt() {
            "Yesterday".to_string()
        } else if day >= week_start && day <= week_end {
            day.format("%a").to_string()
        } else {
            day.format("%b %-d").to_string()
        }
    }
}

impl Default for DayCalendar {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DayCalendar::default().render(*self))
    }
}

/// A contiguous run of timeline entries sharing one day label.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<'a> {
    pub label: DayLabel,
    pub entries: &'a [ChatMessage],
}

/// Split a timeline into contiguous same-day runs, in timeline order.
///
/// A label that reappears after a different one starts a new run; runs are
/// never merged across the gap.
pub fn bucket_by_day<'a>(
    entries: &'a [ChatMessage],
    now: Timestamp,
    calendar: &DayCalendar,
) -> Vec<DayBucket<'a>> {
    let mut buckets = Vec::new();
    let mut start = 0;
    let mut current: Option<DayLabel> = None;

    for (i, entry) in entries.iter().enumerate() {
        let label = calendar.label(entry.timestamp, now);
        match current {
            Some(prev) if prev == label => {}
            Some(prev) => {
                buckets.push(DayBucket {
                    label: prev,
                    entries: &entries[start..i],
                });
                start = i;
                current = Some(label);
            }
            None => current = Some(label),
        }
    }
    if let Some(label) = current {
        buckets.push(DayBucket {
            label,
            entries: &entries[start..],
        });
    }
    buckets
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(month: u32, day: u32, hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2026, month, day, hour, 30, 0).unwrap()
    }

    fn msg(id: &str, at: Timestamp) -> ChatMessage {
        ChatMessage::new(id, "c1", "u2", "Ali", "ok", at)
    }

    // 2026-06-11 is a Thursday.
    fn now() -> Timestamp {
        ts(6, 11, 15)
    }

    #[test]
    fn labels_relative_to_now() {
        let cal = DayCalendar::default();
        assert_eq!(cal.label(ts(6, 11, 1), now()), DayLabel::Today);
        assert_eq!(cal.label(ts(6, 10, 23), now()), DayLabel::Yesterday);
        let older = cal.label(ts(6, 2, 9), now());
        assert_eq!(cal.render(older), "June 2, 2026");
    }

    #[test]
    fn time_only_format_falls_back_to_iso_date() {
        let cal = DayCalendar::new(Utc.fix(), "%H:%M");
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(cal.render(DayLabel::Date(date)), "2026-01-05");
    }

    #[test]
    fn overflowing_offset_falls_back_to_utc() {
        let config = ChatConfig {
            utc_offset_minutes: i32::MIN,
            ..ChatConfig::default()
        };
        let cal = DayCalendar::from_config(&config);
        assert_eq!(cal.local_date(ts(6, 11, 23)), NaiveDate::from_ymd_opt(2026, 6, 11).unwrap());
    }

    #[test]
    fn offset_moves_day_boundary() {
        let cal = DayCalendar::new(FixedOffset::east_opt(3 * 3600).unwrap(), "%F");
        // 22:30 UTC on the 10th is 01:30 on the 11th at UTC+3.
        let late = Utc.with_ymd_and_hms(2026, 6, 10, 22, 30, 0).unwrap();
        assert_eq!(cal.label(late, now()), DayLabel::Today);
    }

    #[test]
    fn contiguous_runs_are_not_merged() {
        let entries = vec![
            msg("a", ts(6, 10, 9)),
            msg("b", ts(6, 11, 9)),
            msg("c", ts(6, 10, 10)),
            msg("d", ts(6, 10, 11)),
        ];
        let buckets = bucket_by_day(&entries, now(), &DayCalendar::default());
        let shape: Vec<(DayLabel, usize)> = buckets.iter().map(|b| (b.label, b.entries.len())).collect();
        assert_eq!(
            shape,
            vec![
                (DayLabel::Yesterday, 1),
                (DayLabel::Today, 1),
                (DayLabel::Yesterday, 2)
            ]
        );
    }

    #[test]
    fn empty_timeline_has_no_buckets() {
        assert!(bucket_by_day(&[], now(), &DayCalendar::default()).is_empty());
    }

    #[test]
    fn channel_time_labels() {
        let cal = DayCalendar::default();
        assert_eq!(cal.channel_time_label(ts(6, 11, 9), now()), "09:30");
        assert_eq!(cal.channel_time_label(ts(6, 10, 9), now()), "Yesterday");
        assert_eq!(cal.channel_time_label(ts(6, 8, 9), now()), "Mon");
        assert_eq!(cal.channel_time_label(ts(6, 7, 9), now()), "Jun 7");
    }

    #[test]
    fn display_uses_default_format() {
        let label = DayLabel::Date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(label.to_string(), "January 5, 2026");
        assert_eq!(DayLabel::Today.to_string(), "Today");
    }
}
