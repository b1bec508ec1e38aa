//! Filter inputs of the venues page
//!
//! Inputs are kept as raw strings so half-typed numbers survive re-renders;
//! they are parsed into a [`VenueFilter`] on every change.

use contracts::domain::a001_venue::{Amenity, VenueFilter, CONTINENTS};
use leptos::prelude::*;
use thaw::*;

use crate::shared::format::format_price;

/// Positive amount such as a price; blank or invalid input means "no limit"
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Positive whole number such as a guest count
pub fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    MinPrice,
    MaxPrice,
    Guests,
    Amenity(Amenity),
    Continent,
}

/// Chips describing every active part of `filter`
pub fn active_tags(filter: &VenueFilter) -> Vec<(FilterField, String)> {
    let mut tags = Vec::new();
    let query = filter.query.trim();
    if !query.is_empty() {
        tags.push((FilterField::Query, format!("\"{}\"", query)));
    }
    if let Some(min) = filter.min_price {
        tags.push((FilterField::MinPrice, format!("From {}", format_price(min))));
    }
    if let Some(max) = filter.max_price {
        tags.push((FilterField::MaxPrice, format!("Up to {}", format_price(max))));
    }
    if let Some(guests) = filter.guests.filter(|g| *g > 1) {
        tags.push((FilterField::Guests, format!("{}+ guests", guests)));
    }
    for amenity in &filter.amenities {
        tags.push((FilterField::Amenity(*amenity), amenity.label().to_string()));
    }
    if let Some(continent) = filter.continent.as_deref().filter(|c| !c.trim().is_empty()) {
        tags.push((FilterField::Continent, continent.to_string()));
    }
    tags
}

#[derive(Clone, Copy)]
pub struct FilterInputs {
    pub query: RwSignal<String>,
    pub min_price: RwSignal<String>,
    pub max_price: RwSignal<String>,
    pub guests: RwSignal<String>,
    pub continent: RwSignal<String>,
    /// One checkbox per entry of [`Amenity::ALL`]
    pub amenities: [RwSignal<bool>; 4],
}

impl FilterInputs {
    pub fn new(query: String) -> Self {
        Self {
            query: RwSignal::new(query),
            min_price: RwSignal::new(String::new()),
            max_price: RwSignal::new(String::new()),
            guests: RwSignal::new(String::new()),
            continent: RwSignal::new(String::new()),
            amenities: Amenity::ALL.map(|_| RwSignal::new(false)),
        }
    }

    /// Current filter; `query` is passed in so callers can debounce it
    pub fn to_filter(&self, query: &str) -> VenueFilter {
        let continent = self.continent.get();
        VenueFilter {
            query: query.to_string(),
            min_price: parse_amount(&self.min_price.get()),
            max_price: parse_amount(&self.max_price.get()),
            guests: parse_count(&self.guests.get()),
            amenities: Amenity::ALL
                .into_iter()
                .zip(self.amenities)
                .filter(|(_, checked)| checked.get())
                .map(|(amenity, _)| amenity)
                .collect(),
            continent: (!continent.trim().is_empty()).then_some(continent),
        }
    }

    pub fn clear_field(&self, field: FilterField) {
        match field {
            FilterField::Query => self.query.set(String::new()),
            FilterField::MinPrice => self.min_price.set(String::new()),
            FilterField::MaxPrice => self.max_price.set(String::new()),
            FilterField::Guests => self.guests.set(String::new()),
            FilterField::Continent => self.continent.set(String::new()),
            FilterField::Amenity(amenity) => {
                if let Some(pos) = Amenity::ALL.iter().position(|a| *a == amenity) {
                    self.amenities[pos].set(false);
                }
            }
        }
    }

    pub fn clear(&self) {
        self.query.set(String::new());
        self.min_price.set(String::new());
        self.max_price.set(String::new());
        self.guests.set(String::new());
        self.continent.set(String::new());
        for checked in self.amenities {
            checked.set(false);
        }
    }
}

/// Form fields bound to [`FilterInputs`]
#[component]
pub fn VenueFilterFields(inputs: FilterInputs) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Large align=FlexAlign::End attr:style="flex-wrap: wrap;">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Search"</Label>
                <Input value=inputs.query placeholder="Name, description, city or country"/>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Price per night"</Label>
                <Flex gap=FlexGap::Small>
                    <Input
                        input_type=InputType::Number
                        value=inputs.min_price
                        placeholder="Min"
                        attr:style="width: 110px;"
                    />
                    <Input
                        input_type=InputType::Number
                        value=inputs.max_price
                        placeholder="Max"
                        attr:style="width: 110px;"
                    />
                </Flex>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Guests"</Label>
                <Input
                    input_type=InputType::Number
                    value=inputs.guests
                    placeholder="Any"
                    attr:style="width: 90px;"
                />
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Continent"</Label>
                <Select value=inputs.continent>
                    <option value="">"Anywhere"</option>
                    {CONTINENTS
                        .iter()
                        .map(|c| view! { <option value=*c>{*c}</option> })
                        .collect_view()}
                </Select>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Amenities"</Label>
                <Flex gap=FlexGap::Small>
                    {Amenity::ALL
                        .into_iter()
                        .zip(inputs.amenities)
                        .map(|(amenity, checked)| view! {
                            <Checkbox checked=checked label=amenity.label()/>
                        })
                        .collect_view()}
                </Flex>
            </Flex>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 120 "), Some(120.0));
        assert_eq!(parse_amount("99.5"), Some(99.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("4"), Some(4));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("2.5"), None);
    }

    #[test]
    fn test_active_tags() {
        let filter = VenueFilter {
            query: " oslo ".into(),
            max_price: Some(200.0),
            guests: Some(1),
            amenities: vec![Amenity::Wifi],
            continent: Some("Europe".into()),
            ..VenueFilter::default()
        };
        let fields: Vec<FilterField> = active_tags(&filter).into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                FilterField::Query,
                FilterField::MaxPrice,
                FilterField::Amenity(Amenity::Wifi),
                FilterField::Continent,
            ]
        );
        assert_eq!(active_tags(&filter)[0].1, "\"oslo\"");
    }

    #[test]
    fn test_no_tags_for_default_filter() {
        assert!(active_tags(&VenueFilter::default()).is_empty());
    }
}
