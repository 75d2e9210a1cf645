//! Invoice release-window visibility
//!
//! Recurring invoices are created ahead of time by the invoice store; the
//! portal only surfaces the ones that are already released or about to be.
//! Date parsing is fail-open: an invoice with an unparsable release date is
//! always shown rather than silently hidden.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use shared::models::Invoice;

/// Invoices releasing within this many days are already surfaced
pub const RELEASE_LOOKAHEAD_DAYS: i64 = 7;

const SECS_PER_DAY: i64 = 86_400;

/// Parse a release date from the invoice store
///
/// Accepts RFC 3339 plus the date-only and space-separated forms the store
/// has been observed to emit. Returns `None` for anything else; callers
/// treat that as "already released".
pub fn parse_release_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Whole days until the invoice is released, counted with a ceiling
///
/// A release 6 hours away counts as "in 1 day"; anything already released
/// (or unparsable) is `0`.
pub fn days_until_release(release_date: &str, now: DateTime<Utc>) -> i64 {
    let Some(release) = parse_release_date(release_date) else {
        return 0;
    };
    let secs = (release - now).num_seconds();
    if secs <= 0 {
        0
    } else {
        (secs + SECS_PER_DAY - 1) / SECS_PER_DAY
    }
}

/// Whether an invoice should be surfaced: already released, or releasing
/// within the lookahead window
pub fn is_invoice_visible(release_date: &str, now: DateTime<Utc>) -> bool {
    days_until_release(release_date, now) <= RELEASE_LOOKAHEAD_DAYS
}

/// Currently relevant invoices, sorted by release date ascending
///
/// The source list is insertion-ordered, not date-ordered. The sort is
/// stable, so invoices with unparsable dates keep their relative order at
/// the front.
pub fn visible_invoices(invoices: &[Invoice], now: DateTime<Utc>) -> Vec<&Invoice> {
    let mut visible: Vec<&Invoice> = invoices
        .iter()
        .filter(|inv| is_invoice_visible(&inv.release_date, now))
        .collect();
    visible.sort_by_key(|inv| {
        parse_release_date(&inv.release_date).unwrap_or(DateTime::<Utc>::MIN_UTC)
    });
    visible
}
