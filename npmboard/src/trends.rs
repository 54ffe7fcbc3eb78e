use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{DailyDownload, WeeklyBucket};

/// How a daily download series is grouped into weekly buckets.
///
/// The alignment is an explicit configuration choice of the bucketizer, not a
/// side effect of iteration order; pick one per run and stick with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekAlignment {
    /// Consecutive 7-day chunks in arrival order, ignoring the calendar
    /// weekday. A trailing chunk of 1-6 days becomes a final partial bucket
    /// whose `week_ending` is the last day present in the chunk.
    FixedChunks,
    /// Monday-aligned calendar weeks. A bucket is emitted only once all 7
    /// days of its week have been observed; incomplete weeks at either
    /// boundary of the series are dropped.
    CalendarMonday,
}

/// Group a chronological daily series into weekly sums.
///
/// Pure and deterministic: the same series and alignment always produce the
/// same buckets, in chronological order.
pub fn bucketize(series: &[DailyDownload], alignment: WeekAlignment) -> Vec<WeeklyBucket> {
    match alignment {
        WeekAlignment::FixedChunks => series
            .chunks(7)
            .filter_map(|chunk| {
                let last = chunk.last()?;
                Some(WeeklyBucket {
                    week_ending: last.day,
                    downloads: chunk.iter().map(|d| d.downloads).sum(),
                })
            })
            .collect(),
        WeekAlignment::CalendarMonday => {
            let mut buckets = Vec::new();
            let mut week_start: Option<NaiveDate> = None;
            let mut days_seen = 0;
            let mut sum = 0;

            for entry in series {
                let monday =
                    entry.day - Duration::days(i64::from(entry.day.weekday().num_days_from_monday()));
                if week_start != Some(monday) {
                    push_if_complete(&mut buckets, week_start, days_seen, sum);
                    week_start = Some(monday);
                    days_seen = 0;
                    sum = 0;
                }
                days_seen += 1;
                sum += entry.downloads;
            }
            push_if_complete(&mut buckets, week_start, days_seen, sum);

            buckets
        }
    }
}

fn push_if_complete(
    buckets: &mut Vec<WeeklyBucket>,
    week_start: Option<NaiveDate>,
    days_seen: u32,
    sum: u64,
) {
    if let Some(start) = week_start {
        if days_seen == 7 {
            buckets.push(WeeklyBucket {
                week_ending: start + Duration::days(6),
                downloads: sum,
            });
        }
    }
}

/// Historical window requested from the downloads API.
///
/// The two modes reflect the two ways the worker runs: initial population
/// uses a plain trailing window, refresh asks only for completed calendar
/// weeks so refreshed trends never include a half-finished week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendWindow {
    /// A trailing window of the given number of days, ending today.
    TrailingDays(u32),
    /// The given number of completed calendar weeks, ending last Sunday.
    CompletedWeeks(u32),
}

impl TrendWindow {
    /// Resolve the inclusive date range to request, relative to `today`.
    pub fn date_range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            TrendWindow::TrailingDays(days) => {
                (today - Duration::days(i64::from(days)), today)
            }
            TrendWindow::CompletedWeeks(weeks) => {
                let days_since_sunday =
                    i64::from((today.weekday().num_days_from_monday() + 1) % 7);
                let last_sunday = today - Duration::days(days_since_sunday);
                (last_sunday - Duration::weeks(i64::from(weeks)), last_sunday)
            }
        }
    }
}
