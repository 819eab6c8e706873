use chrono::{DateTime, Duration, Utc};

/// Date window a transaction listing is restricted to.
///
/// `After` keeps records strictly newer than the cutoff (the last-N-days
/// filter), while `Between` is inclusive on both ends (the custom range).
/// The asymmetry matches the listing contract and is kept on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateWindow {
	All,
	After(DateTime<Utc>),
	Between(DateTime<Utc>, DateTime<Utc>),
}

impl DateWindow {
	/// Resolves the `frequency` / `selected_dates` pair from a listing
	/// request. A custom range without exactly two dates, or a frequency
	/// that is neither "all", "custom" nor a day count, falls back to no
	/// date filter at all.
	pub fn resolve(
		frequency: &str,
		selected_dates: Option<&[DateTime<Utc>]>,
		now: DateTime<Utc>,
	) -> Self {
		match frequency {
			"all" => DateWindow::All,
			"custom" => match selected_dates {
				Some([from, to]) => DateWindow::Between(*from, *to),
				_ => DateWindow::All,
			},
			days => match days.parse::<i64>() {
				// A day count too large to subtract from `now` gets the same
				// permissive fallback as an unparseable one.
				Ok(n) => Duration::try_days(n)
					.and_then(|d| now.checked_sub_signed(d))
					.map(DateWindow::After)
					.unwrap_or(DateWindow::All),
				Err(_) => DateWindow::All,
			},
		}
	}

	pub fn contains(&self, date: DateTime<Utc>) -> bool {
		match self {
			DateWindow::All => true,
			DateWindow::After(cutoff) => date > *cutoff,
			DateWindow::Between(from, to) => date >= *from && date <= *to,
		}
	}
}
