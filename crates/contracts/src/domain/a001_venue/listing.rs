//! Sorting, slicing and paging of venue lists for display

use serde::{Deserialize, Serialize};

use super::aggregate::Venue;
use crate::shared::api::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueSort {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    Rating,
}

impl VenueSort {
    pub const ALL: [VenueSort; 5] = [
        VenueSort::Newest,
        VenueSort::Oldest,
        VenueSort::PriceLow,
        VenueSort::PriceHigh,
        VenueSort::Rating,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VenueSort::Newest => "newest",
            VenueSort::Oldest => "oldest",
            VenueSort::PriceLow => "price_low",
            VenueSort::PriceHigh => "price_high",
            VenueSort::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VenueSort::Newest => "Newest first",
            VenueSort::Oldest => "Oldest first",
            VenueSort::PriceLow => "Price: low to high",
            VenueSort::PriceHigh => "Price: high to low",
            VenueSort::Rating => "Top rated",
        }
    }

    /// `sort` and `sortOrder` query values for server-side ordering
    pub fn api_sort(&self) -> (&'static str, SortOrder) {
        match self {
            VenueSort::Newest => ("created", SortOrder::Desc),
            VenueSort::Oldest => ("created", SortOrder::Asc),
            VenueSort::PriceLow => ("price", SortOrder::Asc),
            VenueSort::PriceHigh => ("price", SortOrder::Desc),
            VenueSort::Rating => ("rating", SortOrder::Desc),
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

/// Stable sort; equal keys keep their input order.
pub fn sort_venues(venues: &mut [Venue], sort: VenueSort) {
    match sort {
        VenueSort::Newest => venues.sort_by(|a, b| b.created.cmp(&a.created)),
        VenueSort::Oldest => venues.sort_by(|a, b| a.created.cmp(&b.created)),
        VenueSort::PriceLow => venues.sort_by(|a, b| a.price.total_cmp(&b.price)),
        VenueSort::PriceHigh => venues.sort_by(|a, b| b.price.total_cmp(&a.price)),
        VenueSort::Rating => venues.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// The `count` most recently created venues
pub fn newest(venues: &[Venue], count: usize) -> Vec<Venue> {
    let mut sorted = venues.to_vec();
    sort_venues(&mut sorted, VenueSort::Newest);
    sorted.truncate(count);
    sorted
}

/// Grid columns for a viewport width in CSS pixels
pub fn columns_for_width(width: f64) -> usize {
    if width < 640.0 {
        1
    } else if width < 1024.0 {
        2
    } else if width < 1280.0 {
        3
    } else {
        4
    }
}

/// Number of featured cards on the home page: two full rows
pub fn featured_count(width: f64) -> usize {
    columns_for_width(width) * 2
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-indexed, clamped to the last page
    pub page: usize,
    /// Never 0, an empty list still has one (empty) page
    pub page_count: usize,
    pub total: usize,
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total);

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        page_count,
        total,
    }
}

/// Appends the venues of `extra` not already in `venues`; returns how many were added
pub fn merge_missing(venues: &mut Vec<Venue>, extra: Vec<Venue>) -> usize {
    let before = venues.len();
    for venue in extra {
        if !venues.iter().any(|v| v.id == venue.id) {
            venues.push(venue);
        }
    }
    venues.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_venue::aggregate::tests::venue;

    fn sample() -> Vec<Venue> {
        let mut a = venue(
            "00000000-0000-4000-8000-00000000000a",
            "A",
            300.0,
            2,
            "2024-01-01T00:00:00Z",
        );
        a.rating = 3.0;
        let mut b = venue(
            "00000000-0000-4000-8000-00000000000b",
            "B",
            100.0,
            2,
            "2024-03-01T00:00:00Z",
        );
        b.rating = 5.0;
        let mut c = venue(
            "00000000-0000-4000-8000-00000000000c",
            "C",
            100.0,
            2,
            "2024-02-01T00:00:00Z",
        );
        c.rating = 3.0;
        vec![a, b, c]
    }

    fn names(venues: &[Venue]) -> Vec<&str> {
        venues.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_sorts() {
        let mut v = sample();
        sort_venues(&mut v, VenueSort::Newest);
        assert_eq!(names(&v), vec!["B", "C", "A"]);

        sort_venues(&mut v, VenueSort::Oldest);
        assert_eq!(names(&v), vec!["A", "C", "B"]);

        let mut v = sample();
        sort_venues(&mut v, VenueSort::PriceLow);
        assert_eq!(names(&v), vec!["B", "C", "A"]);

        let mut v = sample();
        sort_venues(&mut v, VenueSort::PriceHigh);
        assert_eq!(names(&v), vec!["A", "B", "C"]);

        let mut v = sample();
        sort_venues(&mut v, VenueSort::Rating);
        assert_eq!(names(&v), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for sort in VenueSort::ALL {
            assert_eq!(VenueSort::from_key(sort.key()), sort);
        }
        assert_eq!(VenueSort::from_key("bogus"), VenueSort::Newest);
    }

    #[test]
    fn test_api_sort() {
        assert_eq!(VenueSort::Newest.api_sort(), ("created", SortOrder::Desc));
        assert_eq!(VenueSort::PriceLow.api_sort(), ("price", SortOrder::Asc));
    }

    #[test]
    fn test_newest_slices() {
        let v = sample();
        assert_eq!(names(&newest(&v, 2)), vec!["B", "C"]);
        assert_eq!(newest(&v, 10).len(), 3);
        assert!(newest(&v, 0).is_empty());
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(columns_for_width(375.0), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(1023.9), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(1920.0), 4);
        assert_eq!(featured_count(375.0), 2);
        assert_eq!(featured_count(1920.0), 8);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=25).collect();

        let first = paginate(&items, 0, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.page_count, 3);
        assert_eq!(first.total, 25);

        let last = paginate(&items, 2, 10);
        assert_eq!(last.items, (21..=25).collect::<Vec<_>>());

        let clamped = paginate(&items, 99, 10);
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.items.len(), 5);
    }

    #[test]
    fn test_paginate_empty() {
        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 3, 12);
        assert_eq!(page.page, 0);
        assert_eq!(page.page_count, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_merge_missing_skips_known_ids() {
        let mut loaded = sample();
        let mut hits = sample();
        hits.truncate(1);
        hits.push(venue(
            "00000000-0000-4000-8000-00000000000d",
            "D",
            80.0,
            3,
            "2024-04-01T00:00:00Z",
        ));

        assert_eq!(merge_missing(&mut loaded, hits), 1);
        assert_eq!(names(&loaded), vec!["A", "B", "C", "D"]);
    }
}
