//! Simplified SM-2 spaced repetition scheduling
//!
//! Ratings map to quality scores 0-3:
//! - Again (0): lapse; reps reset, short relearn interval, ease penalty
//! - Hard (1): shortest success interval, slows ease growth
//! - Good (2): normal progression
//! - Easy (3): longest interval, fastest ease growth
//!
//! Unlike classic SM-2 with its 0-5 quality scale and 1/6-day graduation,
//! this variant graduates in fractional days (a first "Easy" comes back in
//! ~4 hours) and applies a per-rating interval multiplier on mature cards.

use chrono::{DateTime, Duration, Utc};

use super::models::Card;

/// Minimum ease factor allowed
pub const MIN_EASE: f64 = 1.3;

/// Milliseconds per scheduling day
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// The 4-way user rating of one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Internal quality score driving interval and ease adjustment
    pub fn quality(self) -> u8 {
        match self {
            Rating::Again => 0,
            Rating::Hard => 1,
            Rating::Good => 2,
            Rating::Easy => 3,
        }
    }

    /// Anything but a lapse counts as a correct answer
    pub fn is_correct(self) -> bool {
        !matches!(self, Rating::Again)
    }

    /// Parse a user-supplied rating string (name or 1-4 keyboard digit).
    ///
    /// Scheduling must never fail, so anything unrecognized reads as the
    /// mid-tier `Good`.
    pub fn from_input(s: &str) -> Rating {
        match s.trim().to_lowercase().as_str() {
            "again" | "1" => Rating::Again,
            "hard" | "2" => Rating::Hard,
            "good" | "3" => Rating::Good,
            "easy" | "4" => Rating::Easy,
            _ => Rating::Good,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Again => "Again",
            Rating::Hard => "Hard",
            Rating::Good => "Good",
            Rating::Easy => "Easy",
        }
    }

    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];
}

/// Apply one rating to a card, updating `reps`, `ease`, `interval`, and
/// `due` in place.
///
/// - Lapse: reps reset to 0, interval 0.5 days, ease drops 0.2 (floor 1.3).
/// - First rep: fixed graduation intervals (Easy 4h, Good 1d, Hard 12h).
/// - Second rep: Easy 3d, Good 2d, Hard 1d.
/// - Later reps: ease += (q-1)*0.05 - 0.02 (floor 1.3), then
///   interval = round(interval * ease * mult) with mult 0.9/1.0/1.15 for
///   Hard/Good/Easy. An interval that rounds to 0 is allowed; the card
///   simply comes back immediately.
///
/// Ends with `due = now + interval` unconditionally.
pub fn schedule(card: &mut Card, rating: Rating, now: DateTime<Utc>) {
    let q = rating.quality();

    if q == 0 {
        card.interval = 0.5;
        card.ease = (card.ease - 0.2).max(MIN_EASE);
        card.reps = 0;
    } else {
        if card.reps == 0 {
            card.interval = match rating {
                Rating::Easy => 4.0 / 24.0,
                Rating::Good => 1.0,
                _ => 0.5,
            };
        } else if card.reps == 1 {
            card.interval = match rating {
                Rating::Easy => 3.0,
                Rating::Good => 2.0,
                _ => 1.0,
            };
        } else {
            card.ease = (card.ease + (q as f64 - 1.0) * 0.05 - 0.02).max(MIN_EASE);
            let mult = match rating {
                Rating::Hard => 0.9,
                Rating::Easy => 1.15,
                _ => 1.0,
            };
            card.interval = (card.interval * card.ease * mult).round();
        }
        card.reps += 1;
    }

    card.due = Some(due_after(now, card.interval));
}

fn due_after(now: DateTime<Utc>, interval_days: f64) -> DateTime<Utc> {
    now + Duration::milliseconds((interval_days * DAY_MS as f64).round() as i64)
}

/// Intervals (in days) each rating would schedule, in Again..Easy order.
/// Shown next to the rating prompt so the user knows what they are choosing.
pub fn preview_intervals(card: &Card, now: DateTime<Utc>) -> [f64; 4] {
    Rating::ALL.map(|rating| {
        let mut copy = card.clone();
        schedule(&mut copy, rating, now);
        copy.interval
    })
}

/// Format an interval in days to a short human-readable string
pub fn format_interval(days: f64) -> String {
    if days <= 0.0 {
        return "now".to_string();
    }
    if days < 1.0 {
        let hours = (days * 24.0).round().max(1.0) as i64;
        return format!("{}h", hours);
    }
    let whole = days.round() as i64;
    if whole < 7 {
        format!("{}d", whole)
    } else if whole < 30 {
        format!("{}w", whole / 7)
    } else if whole < 365 {
        format!("{}mo", whole / 30)
    } else {
        format!("{}y", whole / 365)
    }
}

/// Format how long until a card comes due ("—" if never scheduled)
pub fn time_until(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(due) = due else {
        return "—".to_string();
    };
    let delta = due - now;
    if delta <= Duration::zero() {
        return "due now".to_string();
    }
    let mins = (delta.num_seconds() as f64 / 60.0).round() as i64;
    if mins < 60 {
        return format!("in {}m", mins);
    }
    let hours = (mins as f64 / 60.0).round() as i64;
    if hours < 48 {
        return format!("in {}h", hours);
    }
    format!("in {}d", (hours as f64 / 24.0).round() as i64)
}
