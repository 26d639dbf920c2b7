use crate::models::Contribution;
use chrono::{Datelike, Duration, NaiveDate};

/// Canonical trailing window: 26 full weeks. Applied by the proxy before
/// caching and again by the page as a defensive clip.
pub const WINDOW_DAYS: usize = 182;

/// Datasets at least this long are treated as an unclipped full year for the
/// range heading.
pub const FULL_YEAR_THRESHOLD: usize = 200;

/// A week-major column of the heatmap. Leading `None`s pad the first week so
/// day rows line up with weekdays; the final week may be short.
pub type Week = Vec<Option<Contribution>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    /// Index of the week column the label sits above.
    pub week: usize,
    pub label: String,
}

/// Keeps the most recent `window` entries in original order; shorter inputs
/// pass through unchanged.
pub fn tail_slice(mut history: Vec<Contribution>, window: usize) -> Vec<Contribution> {
    if history.len() > window {
        history.drain(..history.len() - window);
    }
    history
}

/// Aligns the dataset into 7-day columns. The first entry's weekday index
/// (Sunday = 0) determines how many leading placeholders are prepended, so
/// every real day lands in its weekday row.
pub fn align_weeks(history: &[Contribution]) -> Vec<Week> {
    let Some(first) = history.first() else {
        return Vec::new();
    };

    let padding = first.date.weekday().num_days_from_sunday() as usize;
    let mut weeks = Vec::with_capacity((padding + history.len()).div_ceil(7));
    let mut current: Week = Vec::with_capacity(7);

    let cells = std::iter::repeat_n(None, padding).chain(history.iter().cloned().map(Some));
    for cell in cells {
        current.push(cell);
        if current.len() == 7 {
            weeks.push(std::mem::replace(&mut current, Vec::with_capacity(7)));
        }
    }
    if !current.is_empty() {
        weeks.push(current);
    }

    weeks
}

/// One label per month transition, attached to the first week column whose
/// first real day falls in the new month.
pub fn month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month = None;

    for (index, week) in weeks.iter().enumerate() {
        let Some(day) = week.iter().flatten().next() else {
            continue;
        };
        let month = day.date.month();
        if last_month != Some(month) {
            labels.push(MonthLabel {
                week: index,
                label: day.date.format("%b").to_string(),
            });
            last_month = Some(month);
        }
    }

    labels
}

/// Intensity bucket 0..=4. Boundary counts belong to the lower bucket.
pub fn color_bucket(count: u32) -> usize {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// Short human date for the tooltip, e.g. "21st Aug".
pub fn day_label(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix} {}", date.format("%b"))
}

/// Heading badge for the graph: the clipped default window reads as six
/// months, anything near a full year reads as a year.
pub fn range_heading(len: usize) -> &'static str {
    if len < FULL_YEAR_THRESHOLD {
        "Last 6 Months"
    } else {
        "Last Year"
    }
}

/// Synthetic trailing-window dataset shown until (and unless) real data
/// arrives. Deterministic per date so reloads look stable.
pub fn placeholder_history(today: NaiveDate) -> Vec<Contribution> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            Contribution {
                date,
                count: synthetic_count(date),
            }
        })
        .collect()
}

fn synthetic_count(date: NaiveDate) -> u32 {
    let mixed = (date.num_days_from_ce() as u32).wrapping_mul(2_654_435_761);
    let value = (mixed >> 16) % 11;
    value.saturating_sub(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consecutive(from: NaiveDate, len: usize) -> Vec<Contribution> {
        (0..len)
            .map(|offset| Contribution {
                date: from + Duration::days(offset as i64),
                count: (offset % 9) as u32,
            })
            .collect()
    }

    #[test]
    fn padding_matches_first_weekday() {
        // 2024-01-03 is a Wednesday, weekday index 3 from Sunday.
        let history = consecutive(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 30);
        let weeks = align_weeks(&history);
        let padding = weeks[0].iter().take_while(|cell| cell.is_none()).count();
        assert_eq!(padding, 3);
        assert_eq!(weeks[0][3].as_ref().unwrap().date, history[0].date);
    }

    #[test]
    fn sunday_start_needs_no_padding() {
        // 2024-01-07 is a Sunday.
        let history = consecutive(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), 14);
        let weeks = align_weeks(&history);
        assert_eq!(weeks.len(), 2);
        assert!(weeks.iter().all(|week| week.len() == 7));
        assert!(weeks[0][0].is_some());
    }

    #[test]
    fn only_final_week_may_be_short() {
        let history = consecutive(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 100);
        let weeks = align_weeks(&history);
        let (last, full) = weeks.split_last().unwrap();
        assert!(full.iter().all(|week| week.len() == 7));
        assert!(!last.is_empty() && last.len() <= 7);

        let total: usize = weeks.iter().map(Vec::len).sum();
        assert_eq!(total, 100 + 3);
    }

    #[test]
    fn empty_history_yields_no_weeks() {
        assert!(align_weeks(&[]).is_empty());
    }

    #[test]
    fn one_month_label_per_month_in_order() {
        // Sunday 2024-03-31 through May: three months, three labels.
        let history = consecutive(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), 62);
        let weeks = align_weeks(&history);
        let labels = month_labels(&weeks);

        let names: Vec<&str> = labels.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(names, ["Mar", "Apr", "May"]);
        assert_eq!(labels[0].week, 0);
        assert!(labels.windows(2).all(|pair| pair[0].week < pair[1].week));
    }

    #[test]
    fn month_label_sits_on_first_week_of_month() {
        let history = consecutive(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), 62);
        let weeks = align_weeks(&history);
        let labels = month_labels(&weeks);

        let april = labels.iter().find(|l| l.label == "Apr").unwrap();
        let first_day = weeks[april.week].iter().flatten().next().unwrap();
        assert_eq!(first_day.date.month(), 4);
        assert!(weeks[..april.week]
            .iter()
            .all(|week| week.iter().flatten().next().unwrap().date.month() != 4));
    }

    #[test]
    fn buckets_have_inclusive_boundaries() {
        assert_eq!(color_bucket(0), 0);
        assert_eq!(color_bucket(1), 1);
        assert_eq!(color_bucket(2), 1);
        assert_eq!(color_bucket(3), 2);
        assert_eq!(color_bucket(4), 2);
        assert_eq!(color_bucket(5), 3);
        assert_eq!(color_bucket(6), 3);
        assert_eq!(color_bucket(7), 4);
        assert_eq!(color_bucket(250), 4);
    }

    #[test]
    fn buckets_are_monotonic() {
        let mut previous = 0;
        for count in 0..=40 {
            let bucket = color_bucket(count);
            assert!(bucket >= previous);
            previous = bucket;
        }
    }

    #[test]
    fn tail_slice_keeps_most_recent() {
        let history = consecutive(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 10);
        let clipped = tail_slice(history.clone(), 4);
        assert_eq!(clipped, history[6..]);

        let untouched = tail_slice(history.clone(), 10);
        assert_eq!(untouched, history);
        let untouched = tail_slice(history.clone(), 100);
        assert_eq!(untouched, history);
    }

    #[test]
    fn day_labels_use_ordinal_suffixes() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 8, d).unwrap();
        assert_eq!(day_label(date(1)), "1st Aug");
        assert_eq!(day_label(date(2)), "2nd Aug");
        assert_eq!(day_label(date(3)), "3rd Aug");
        assert_eq!(day_label(date(4)), "4th Aug");
        assert_eq!(day_label(date(11)), "11th Aug");
        assert_eq!(day_label(date(12)), "12th Aug");
        assert_eq!(day_label(date(13)), "13th Aug");
        assert_eq!(day_label(date(21)), "21st Aug");
        assert_eq!(day_label(date(22)), "22nd Aug");
        assert_eq!(day_label(date(31)), "31st Aug");
    }

    #[test]
    fn range_heading_switches_at_threshold() {
        assert_eq!(range_heading(WINDOW_DAYS), "Last 6 Months");
        assert_eq!(range_heading(FULL_YEAR_THRESHOLD - 1), "Last 6 Months");
        assert_eq!(range_heading(FULL_YEAR_THRESHOLD), "Last Year");
        assert_eq!(range_heading(365), "Last Year");
    }

    #[test]
    fn placeholder_is_deterministic_and_window_sized() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let first = placeholder_history(today);
        let second = placeholder_history(today);
        assert_eq!(first, second);
        assert_eq!(first.len(), WINDOW_DAYS);
        assert_eq!(first.last().unwrap().date, today);
        assert!(first.windows(2).all(|pair| pair[0].date < pair[1].date));
    }
}
