use std::str::FromStr;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use super::*;

fn product(id: &str, title: &str, category: &str, price: Option<&str>) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        summary: String::new(),
        category: category.to_string(),
        price: price.map(|p| Decimal::from_str(p).unwrap()),
        image_url: None,
        created_at: None,
    }
}

fn sample() -> Vec<Product> {
    let mut lamp = product("a", "Desk Lamp", "Verlichting", Some("24.95"));
    lamp.summary = "Warm white LED".to_string();
    lamp.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap());

    let mut sheet = product("b", "Super laken", "Textiel", Some("39.00"));
    sheet.summary = "Katoenen hoeslaken".to_string();
    sheet.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap());

    let mut panel = product("c", "Zonnepaneel", "Energie", Some("199.99"));
    panel.summary = "Paneel voor op het dak, werkt met elke lamp-aansluiting".to_string();
    panel.created_at = Some(Utc.with_ymd_and_hms(2023, 11, 20, 0, 0, 0).unwrap());

    let bulb = product("d", "Spare bulb", "Verlichting", None);

    vec![lamp, sheet, panel, bulb]
}

fn ids(view: &[Product]) -> Vec<&str> {
    view.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn default_query_returns_everything_in_incoming_order() {
    let products = sample();
    let view = derive_view(&products, &CatalogQuery::default());
    assert_eq!(ids(&view), ["a", "b", "c", "d"]);
}

#[test]
fn category_filter_keeps_only_exact_matches() {
    let products = sample();
    let query = CatalogQuery {
        category: CategoryFilter::Named("Verlichting".to_string()),
        ..CatalogQuery::default()
    };
    let view = derive_view(&products, &query);
    assert_eq!(ids(&view), ["a", "d"]);
    assert!(view.iter().all(|p| p.category == "Verlichting"));
}

#[test]
fn category_filter_is_case_sensitive() {
    let products = sample();
    let query = CatalogQuery {
        category: CategoryFilter::Named("verlichting".to_string()),
        ..CatalogQuery::default()
    };
    assert!(derive_view(&products, &query).is_empty());
}

#[test]
fn search_is_case_insensitive_on_title() {
    let products = sample();
    let query = CatalogQuery {
        search: "LAKEN".to_string(),
        ..CatalogQuery::default()
    };
    assert_eq!(ids(&derive_view(&products, &query)), ["b"]);
}

#[test]
fn search_matches_summary_as_well_as_title() {
    let products = sample();
    let query = CatalogQuery {
        search: "lamp".to_string(),
        ..CatalogQuery::default()
    };
    // "Desk Lamp" by title, "Zonnepaneel" by its summary.
    assert_eq!(ids(&derive_view(&products, &query)), ["a", "c"]);
}

#[test]
fn search_combines_with_category() {
    let products = sample();
    let query = CatalogQuery {
        category: CategoryFilter::Named("Energie".to_string()),
        search: "lamp".to_string(),
        sort: SortKey::Featured,
    };
    assert_eq!(ids(&derive_view(&products, &query)), ["c"]);
}

#[test]
fn price_low_sorts_ascending_with_missing_price_as_zero() {
    let products = sample();
    let query = CatalogQuery {
        sort: SortKey::PriceLow,
        ..CatalogQuery::default()
    };
    assert_eq!(ids(&derive_view(&products, &query)), ["d", "a", "b", "c"]);
}

#[test]
fn price_high_is_the_reverse_of_price_low_for_distinct_prices() {
    let products = sample();
    let low = derive_view(
        &products,
        &CatalogQuery {
            sort: SortKey::PriceLow,
            ..CatalogQuery::default()
        },
    );
    let mut high = derive_view(
        &products,
        &CatalogQuery {
            sort: SortKey::PriceHigh,
            ..CatalogQuery::default()
        },
    );
    high.reverse();
    assert_eq!(ids(&low), ids(&high));
}

#[test]
fn newest_sorts_descending_and_puts_undated_last() {
    let products = sample();
    let query = CatalogQuery {
        sort: SortKey::Newest,
        ..CatalogQuery::default()
    };
    assert_eq!(ids(&derive_view(&products, &query)), ["b", "a", "c", "d"]);
}

#[test]
fn equal_prices_keep_incoming_order() {
    let products = vec![
        product("x", "First", "A", Some("5")),
        product("y", "Second", "A", Some("5")),
        product("z", "Third", "A", Some("1")),
    ];
    let query = CatalogQuery {
        sort: SortKey::PriceLow,
        ..CatalogQuery::default()
    };
    assert_eq!(ids(&derive_view(&products, &query)), ["z", "x", "y"]);
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let products = sample();
    assert_eq!(
        categories(&products),
        ["Verlichting", "Textiel", "Energie"]
    );
}

#[test]
fn category_counts_follow_category_order() {
    let products = sample();
    assert_eq!(
        category_counts(&products),
        vec![
            ("Verlichting".to_string(), 2),
            ("Textiel".to_string(), 1),
            ("Energie".to_string(), 1),
        ]
    );
}

#[test]
fn sort_key_parses_its_display_names() {
    for key in [
        SortKey::Featured,
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
    ] {
        assert_eq!(SortKey::from_str(&key.to_string()), Ok(key));
    }
}

#[test]
fn sort_key_rejects_unknown_name() {
    assert_eq!(
        SortKey::from_str("cheapest"),
        Err(CoreError::InvalidSortKey("cheapest".to_string()))
    );
}

#[test]
fn category_filter_all_is_special() {
    assert_eq!(CategoryFilter::from_str("all"), Ok(CategoryFilter::All));
    assert_eq!(
        CategoryFilter::from_str("Textiel"),
        Ok(CategoryFilter::Named("Textiel".to_string()))
    );
}
