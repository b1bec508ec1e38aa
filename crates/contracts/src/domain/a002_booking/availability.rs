//! Availability of a venue for the booking calendar
//!
//! Stays are half-open night ranges: a stay from the 1st to the 4th occupies
//! the nights of the 1st, 2nd and 3rd, and the 4th is free for the next
//! guest to check in.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use super::aggregate::{date_to_utc, Booking, BookingDto};
use crate::domain::a001_venue::aggregate::Venue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Check-out must be after check-in")]
    InvalidRange,
    #[error("Check-in cannot be in the past")]
    InPast,
    #[error("Some of the selected nights are already booked")]
    Unavailable,
    #[error("This venue allows at most {max} guests")]
    TooManyGuests { max: u32 },
    #[error("At least one guest is required")]
    NoGuests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidRange);
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    /// Every occupied night, check-in first
    pub fn dates(&self) -> Vec<NaiveDate> {
        (0..self.nights() as i64)
            .map(|offset| self.check_in + Duration::days(offset))
            .collect()
    }

    pub fn contains(&self, night: NaiveDate) -> bool {
        self.check_in <= night && night < self.check_out
    }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    fn from_booking(booking: &Booking) -> Self {
        let check_in = booking.check_in();
        let check_out = booking.check_out();
        if check_out <= check_in {
            Self {
                check_in,
                check_out: check_in + Duration::days(1),
            }
        } else {
            Self {
                check_in,
                check_out,
            }
        }
    }
}

/// Occupied ranges of a venue, sorted and with touching ranges merged
pub fn booked_ranges(bookings: &[Booking]) -> Vec<StayRange> {
    let mut ranges: Vec<StayRange> = bookings.iter().map(StayRange::from_booking).collect();
    ranges.sort();

    let mut merged: Vec<StayRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.check_in <= last.check_out => {
                last.check_out = last.check_out.max(range.check_out);
            }
            _ => merged.push(range),
        }
    }
    merged
}

pub fn is_date_booked(ranges: &[StayRange], night: NaiveDate) -> bool {
    ranges.iter().any(|r| r.contains(night))
}

/// Dates the calendar must not offer as a check-in
pub fn is_date_disabled(ranges: &[StayRange], night: NaiveDate, today: NaiveDate) -> bool {
    night < today || is_date_booked(ranges, night)
}

pub fn is_range_available(ranges: &[StayRange], range: &StayRange) -> bool {
    !ranges.iter().any(|r| r.overlaps(range))
}

/// Start of the first booked stay after `check_in`.
///
/// This is the latest possible check-out for a stay beginning on `check_in`.
pub fn first_blocked_after(ranges: &[StayRange], check_in: NaiveDate) -> Option<NaiveDate> {
    ranges
        .iter()
        .map(|r| r.check_in)
        .filter(|start| *start > check_in)
        .min()
}

/// Nights times nightly price, rounded to cents
pub fn total_price(price_per_night: f64, range: &StayRange) -> f64 {
    ((price_per_night * range.nights() as f64) * 100.0).round() / 100.0
}

/// What the booking panel collected before submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl BookingRequest {
    pub fn validate(
        &self,
        venue: &Venue,
        ranges: &[StayRange],
        today: NaiveDate,
    ) -> Result<BookingDto, BookingError> {
        if self.guests == 0 {
            return Err(BookingError::NoGuests);
        }
        if self.guests > venue.max_guests {
            return Err(BookingError::TooManyGuests {
                max: venue.max_guests,
            });
        }

        let range = StayRange::new(self.check_in, self.check_out)?;
        if range.check_in < today {
            return Err(BookingError::InPast);
        }
        if !is_range_available(ranges, &range) {
            return Err(BookingError::Unavailable);
        }

        Ok(BookingDto {
            date_from: date_to_utc(range.check_in),
            date_to: date_to_utc(range.check_out),
            guests: self.guests,
            venue_id: venue.id,
        })
    }
}

/// Splits bookings into upcoming (soonest first) and past (latest first)
pub fn split_upcoming(bookings: &[Booking], today: NaiveDate) -> (Vec<Booking>, Vec<Booking>) {
    let (mut upcoming, mut past): (Vec<Booking>, Vec<Booking>) = bookings
        .iter()
        .cloned()
        .partition(|b| b.check_out() > today);

    upcoming.sort_by_key(|b| b.date_from);
    past.sort_by(|a, b| b.date_from.cmp(&a.date_from));
    (upcoming, past)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_venue::aggregate::tests::venue;
    use crate::domain::a002_booking::aggregate::tests::booking;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(from: &str, to: &str) -> StayRange {
        StayRange::new(d(from), d(to)).unwrap()
    }

    #[test]
    fn test_range_rejects_empty_or_inverted() {
        assert_eq!(
            StayRange::new(d("2024-05-02"), d("2024-05-02")),
            Err(BookingError::InvalidRange)
        );
        assert_eq!(
            StayRange::new(d("2024-05-03"), d("2024-05-02")),
            Err(BookingError::InvalidRange)
        );
    }

    #[test]
    fn test_nights_and_dates() {
        let r = range("2024-02-27", "2024-03-02");
        assert_eq!(r.nights(), 4);
        assert_eq!(
            r.dates(),
            vec![d("2024-02-27"), d("2024-02-28"), d("2024-02-29"), d("2024-03-01")]
        );
    }

    #[test]
    fn test_booked_ranges_sorts_and_merges() {
        let bookings = vec![
            booking(1, "2024-06-10", "2024-06-12", 1),
            booking(2, "2024-06-01", "2024-06-03", 1),
            booking(3, "2024-06-03", "2024-06-05", 1),
            booking(4, "2024-06-11", "2024-06-15", 1),
        ];
        assert_eq!(
            booked_ranges(&bookings),
            vec![range("2024-06-01", "2024-06-05"), range("2024-06-10", "2024-06-15")]
        );
    }

    #[test]
    fn test_same_day_booking_blocks_one_night() {
        let ranges = booked_ranges(&[booking(1, "2024-06-10", "2024-06-10", 1)]);
        assert_eq!(ranges, vec![range("2024-06-10", "2024-06-11")]);
    }

    #[test]
    fn test_check_out_day_is_free() {
        let ranges = booked_ranges(&[booking(1, "2024-06-10", "2024-06-12", 1)]);
        assert!(!is_date_booked(&ranges, d("2024-06-09")));
        assert!(is_date_booked(&ranges, d("2024-06-10")));
        assert!(is_date_booked(&ranges, d("2024-06-11")));
        assert!(!is_date_booked(&ranges, d("2024-06-12")));
    }

    #[test]
    fn test_disabled_includes_past() {
        let ranges = booked_ranges(&[booking(1, "2024-06-10", "2024-06-12", 1)]);
        let today = d("2024-06-05");
        assert!(is_date_disabled(&ranges, d("2024-06-04"), today));
        assert!(!is_date_disabled(&ranges, d("2024-06-05"), today));
        assert!(is_date_disabled(&ranges, d("2024-06-11"), today));
    }

    #[test]
    fn test_range_availability() {
        let ranges = booked_ranges(&[booking(1, "2024-06-10", "2024-06-12", 1)]);
        assert!(is_range_available(&ranges, &range("2024-06-07", "2024-06-10")));
        assert!(is_range_available(&ranges, &range("2024-06-12", "2024-06-14")));
        assert!(!is_range_available(&ranges, &range("2024-06-09", "2024-06-11")));
        assert!(!is_range_available(&ranges, &range("2024-06-08", "2024-06-20")));
    }

    #[test]
    fn test_first_blocked_after() {
        let ranges = booked_ranges(&[
            booking(1, "2024-06-10", "2024-06-12", 1),
            booking(2, "2024-06-20", "2024-06-22", 1),
        ]);
        assert_eq!(first_blocked_after(&ranges, d("2024-06-01")), Some(d("2024-06-10")));
        assert_eq!(first_blocked_after(&ranges, d("2024-06-12")), Some(d("2024-06-20")));
        assert_eq!(first_blocked_after(&ranges, d("2024-06-25")), None);
    }

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(120.0, &range("2024-06-01", "2024-06-04")), 360.0);
        assert_eq!(total_price(33.33, &range("2024-06-01", "2024-06-04")), 99.99);
    }

    #[test]
    fn test_request_validation() {
        let v = venue(
            "00000000-0000-4000-8000-000000000001",
            "Cabin",
            100.0,
            4,
            "2024-01-01T00:00:00Z",
        );
        let ranges = booked_ranges(&[booking(1, "2024-06-10", "2024-06-12", 1)]);
        let today = d("2024-06-01");

        let ok = BookingRequest {
            check_in: d("2024-06-05"),
            check_out: d("2024-06-10"),
            guests: 2,
        };
        let dto = ok.validate(&v, &ranges, today).unwrap();
        assert_eq!(dto.guests, 2);
        assert_eq!(dto.venue_id, v.id);
        assert_eq!(dto.date_from.date_naive(), d("2024-06-05"));
        assert_eq!(dto.date_to.date_naive(), d("2024-06-10"));

        let no_guests = BookingRequest { guests: 0, ..ok };
        assert_eq!(no_guests.validate(&v, &ranges, today), Err(BookingError::NoGuests));

        let crowd = BookingRequest { guests: 5, ..ok };
        assert_eq!(crowd.validate(&v, &ranges, today), Err(BookingError::TooManyGuests { max: 4 }));

        let past = BookingRequest {
            check_in: d("2024-05-30"),
            ..ok
        };
        assert_eq!(past.validate(&v, &ranges, today), Err(BookingError::InPast));

        let clash = BookingRequest {
            check_out: d("2024-06-11"),
            ..ok
        };
        assert_eq!(clash.validate(&v, &ranges, today), Err(BookingError::Unavailable));

        let inverted = BookingRequest {
            check_out: d("2024-06-04"),
            ..ok
        };
        assert_eq!(inverted.validate(&v, &ranges, today), Err(BookingError::InvalidRange));
    }

    #[test]
    fn test_split_upcoming() {
        let bookings = vec![
            booking(1, "2024-05-01", "2024-05-03", 1),
            booking(2, "2024-07-01", "2024-07-03", 1),
            booking(3, "2024-06-01", "2024-06-10", 1),
            booking(4, "2024-04-01", "2024-04-03", 1),
        ];
        let (upcoming, past) = split_upcoming(&bookings, d("2024-06-05"));
        let ids = |v: &[Booking]| v.iter().map(|b| b.check_in()).collect::<Vec<_>>();
        assert_eq!(ids(&upcoming), vec![d("2024-06-01"), d("2024-07-01")]);
        assert_eq!(ids(&past), vec![d("2024-05-01"), d("2024-04-01")]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BookingError::TooManyGuests { max: 3 }.to_string(),
            "This venue allows at most 3 guests"
        );
    }
}
