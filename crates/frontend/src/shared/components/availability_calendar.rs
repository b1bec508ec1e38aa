use crate::shared::date_utils::format_month;
use crate::shared::icons::icon;
use chrono::{Datelike, Duration, NaiveDate};
use contracts::domain::a002_booking::{first_blocked_after, is_date_disabled, StayRange};
use leptos::prelude::*;

/// Check-in and check-out picked in the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl Selection {
    pub fn range(&self) -> Option<StayRange> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => StayRange::new(check_in, check_out).ok(),
            _ => None,
        }
    }

    pub fn is_selected(&self, day: NaiveDate) -> bool {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => check_in <= day && day <= check_out,
            (Some(check_in), None) => check_in == day,
            _ => false,
        }
    }
}

/// Applies a click on `day` to the current selection.
///
/// The first click picks the check-in, the second the check-out. A check-out
/// may land on the first day of the next booked stay but never past it.
pub fn next_selection(
    current: Selection,
    day: NaiveDate,
    ranges: &[StayRange],
    today: NaiveDate,
) -> Selection {
    let start_over = |day: NaiveDate| {
        if is_date_disabled(ranges, day, today) {
            current
        } else {
            Selection {
                check_in: Some(day),
                check_out: None,
            }
        }
    };

    match (current.check_in, current.check_out) {
        (Some(check_in), None) if day > check_in => {
            let limit = first_blocked_after(ranges, check_in);
            if limit.map_or(true, |limit| day <= limit) {
                Selection {
                    check_in: Some(check_in),
                    check_out: Some(day),
                }
            } else {
                start_over(day)
            }
        }
        _ => start_over(day),
    }
}

/// Monday-first grid of the month containing `month`; `None` pads the edges
pub fn month_grid(month: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = month.with_day(1).unwrap_or(month);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let days_in_month = next_month
        .map(|next| (next - first).num_days())
        .unwrap_or(31);

    let lead = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
    cells.extend((0..days_in_month).map(|offset| Some(first + Duration::days(offset))));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let index = month.year() * 12 + month.month0() as i32 + delta;
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
        .unwrap_or(month)
}

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// AvailabilityCalendar component - month view with booked nights blocked
#[component]
pub fn AvailabilityCalendar(
    /// Booked stays of the venue, merged
    #[prop(into)]
    ranges: Signal<Vec<StayRange>>,

    /// First selectable day
    today: NaiveDate,

    /// Current selection
    selection: RwSignal<Selection>,

    /// Read-only calendars only show availability
    #[prop(optional)]
    readonly: bool,
) -> impl IntoView {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let visible_month = RwSignal::new(first_of_month);

    let on_prev = move |_| visible_month.update(|m| *m = shift_month(*m, -1));
    let on_next = move |_| visible_month.update(|m| *m = shift_month(*m, 1));
    let at_first_month = move || visible_month.get() <= first_of_month;

    let on_day = move |day: NaiveDate| {
        if readonly {
            return;
        }
        let current = selection.get_untracked();
        let next = ranges.with_untracked(|r| next_selection(current, day, r, today));
        selection.set(next);
    };

    view! {
        <div class="availability-calendar">
            <div class="availability-calendar__header">
                <button
                    type="button"
                    class="button button--icon"
                    aria-label="Previous month"
                    disabled=at_first_month
                    on:click=on_prev
                >
                    {icon("chevron-left")}
                </button>
                <span class="availability-calendar__month">
                    {move || format_month(visible_month.get())}
                </span>
                <button
                    type="button"
                    class="button button--icon"
                    aria-label="Next month"
                    on:click=on_next
                >
                    {icon("chevron-right")}
                </button>
            </div>

            <div class="availability-calendar__grid">
                {WEEKDAYS
                    .iter()
                    .map(|d| view! { <span class="availability-calendar__weekday">{*d}</span> })
                    .collect_view()}
                {move || {
                    month_grid(visible_month.get())
                        .into_iter()
                        .map(|cell| match cell {
                            None => view! { <span class="availability-calendar__pad"></span> }.into_any(),
                            Some(day) => {
                                let disabled = ranges.with(|r| is_date_disabled(r, day, today));
                                let class = move || {
                                    let mut class = String::from("availability-calendar__day");
                                    if disabled {
                                        class.push_str(" availability-calendar__day--booked");
                                    }
                                    if selection.with(|s| s.is_selected(day)) {
                                        class.push_str(" availability-calendar__day--selected");
                                    }
                                    if day == today {
                                        class.push_str(" availability-calendar__day--today");
                                    }
                                    class
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=class
                                        disabled=readonly
                                        aria-disabled=disabled.to_string()
                                        title=day.format("%Y-%m-%d").to_string()
                                        on:click=move |_| on_day(day)
                                    >
                                        {day.day()}
                                    </button>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="availability-calendar__legend">
                <span class="legend legend--free">"Available"</span>
                <span class="legend legend--booked">"Booked"</span>
                {(!readonly).then(|| view! {
                    <span class="legend legend--selected">"Your stay"</span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn booked() -> Vec<StayRange> {
        vec![StayRange::new(d(2024, 3, 10), d(2024, 3, 13)).unwrap()]
    }

    #[test]
    fn test_month_grid_starts_on_monday() {
        // 1 March 2024 is a Friday
        let grid = month_grid(d(2024, 3, 15));
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(grid.iter().flatten().count(), 31);
        assert_eq!(grid.iter().flatten().last(), Some(&d(2024, 3, 31)));
    }

    #[test]
    fn test_month_grid_february_leap_year() {
        assert_eq!(month_grid(d(2024, 2, 1)).iter().flatten().count(), 29);
        assert_eq!(month_grid(d(2023, 12, 1)).iter().flatten().count(), 31);
    }

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(d(2024, 12, 1), 1), d(2025, 1, 1));
        assert_eq!(shift_month(d(2024, 1, 1), -1), d(2023, 12, 1));
    }

    #[test]
    fn test_first_click_sets_check_in() {
        let s = next_selection(Selection::default(), d(2024, 3, 5), &booked(), d(2024, 3, 1));
        assert_eq!(s.check_in, Some(d(2024, 3, 5)));
        assert_eq!(s.check_out, None);
    }

    #[test]
    fn test_booked_or_past_day_cannot_be_check_in() {
        let today = d(2024, 3, 1);
        let s = next_selection(Selection::default(), d(2024, 3, 11), &booked(), today);
        assert_eq!(s, Selection::default());
        let s = next_selection(Selection::default(), d(2024, 2, 28), &booked(), today);
        assert_eq!(s, Selection::default());
    }

    #[test]
    fn test_check_out_may_touch_next_booking() {
        let today = d(2024, 3, 1);
        let s = next_selection(Selection::default(), d(2024, 3, 7), &booked(), today);
        let s = next_selection(s, d(2024, 3, 10), &booked(), today);
        assert_eq!(s.range(), StayRange::new(d(2024, 3, 7), d(2024, 3, 10)).ok());
    }

    #[test]
    fn test_check_out_past_booking_restarts_selection() {
        let today = d(2024, 3, 1);
        let s = next_selection(Selection::default(), d(2024, 3, 7), &booked(), today);
        let s = next_selection(s, d(2024, 3, 14), &booked(), today);
        assert_eq!(s.check_in, Some(d(2024, 3, 14)));
        assert_eq!(s.check_out, None);
    }

    #[test]
    fn test_earlier_click_moves_check_in() {
        let today = d(2024, 3, 1);
        let s = next_selection(Selection::default(), d(2024, 3, 7), &booked(), today);
        let s = next_selection(s, d(2024, 3, 5), &booked(), today);
        assert_eq!(s.check_in, Some(d(2024, 3, 5)));
        assert!(s.range().is_none());
    }

    #[test]
    fn test_is_selected_covers_whole_stay() {
        let s = Selection {
            check_in: Some(d(2024, 3, 1)),
            check_out: Some(d(2024, 3, 4)),
        };
        assert!(s.is_selected(d(2024, 3, 1)));
        assert!(s.is_selected(d(2024, 3, 4)));
        assert!(!s.is_selected(d(2024, 3, 5)));
    }
}
