use super::*;

fn product(title: &str, kind: &str, price: f64) -> Product {
    Product {
        id: format!("id-{title}"),
        title: title.to_owned(),
        kind: kind.to_owned(),
        price,
        ..Product::default()
    }
}

fn sample_state() -> ProductsState {
    let mut state = ProductsState::default();
    state.set_items(vec![
        product("Oak Chair", "chair", 100.0),
        product("velvet sofa", "sofa", 500.0),
        product("walnut desk", "desk", 750.0),
        product("garden chair", "chair", 45.0),
    ]);
    state
}

#[test]
fn set_items_resets_filtered_to_full_collection() {
    let state = sample_state();
    assert_eq!(state.filtered.len(), 4);
    assert_eq!(state.items, state.filtered);
}

#[test]
fn empty_search_returns_unfiltered_collection() {
    let mut state = sample_state();
    state.search = String::new();
    state.apply_filters();
    assert_eq!(state.filtered.len(), 4);
}

#[test]
fn search_matches_title_case_insensitively() {
    let mut state = sample_state();
    state.search = "CHAIR".to_owned();
    state.apply_filters();
    let titles: Vec<_> = state.filtered.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Oak Chair", "garden chair"]);
}

#[test]
fn category_filter_requires_exact_kind() {
    let mut state = sample_state();
    state.category = "sofa".to_owned();
    state.apply_filters();
    assert_eq!(state.filtered.len(), 1);
    assert_eq!(state.filtered[0].title, "velvet sofa");
}

#[test]
fn price_range_bounds_are_inclusive() {
    let mut state = sample_state();
    state.price_filter = "100-500".to_owned();
    state.apply_filters();
    let prices: Vec<_> = state.filtered.iter().map(|p| p.price).collect();
    assert_eq!(prices, [100.0, 500.0]);
}

#[test]
fn filters_combine_conjunctively() {
    let mut state = sample_state();
    state.search = "chair".to_owned();
    state.category = "chair".to_owned();
    state.price_filter = "0-100".to_owned();
    state.apply_filters();
    let titles: Vec<_> = state.filtered.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Oak Chair", "garden chair"]);
}

#[test]
fn malformed_price_band_is_ignored() {
    let mut state = sample_state();
    state.price_filter = "cheap".to_owned();
    state.apply_filters();
    assert_eq!(state.filtered.len(), 4);
}

#[test]
fn reset_clears_controls_and_restores_collection() {
    let mut state = sample_state();
    state.search = "sofa".to_owned();
    state.category = "sofa".to_owned();
    state.price_filter = "0-100".to_owned();
    state.apply_filters();
    state.reset_filters();
    assert!(state.search.is_empty());
    assert!(state.category.is_empty());
    assert!(state.price_filter.is_empty());
    assert_eq!(state.filtered.len(), 4);
}

#[test]
fn parse_price_range_handles_valid_and_invalid_input() {
    assert_eq!(parse_price_range("101-500"), Some((101.0, 500.0)));
    assert_eq!(parse_price_range(" 0 - 100 "), Some((0.0, 100.0)));
    assert_eq!(parse_price_range(""), None);
    assert_eq!(parse_price_range("100"), None);
    assert_eq!(parse_price_range("a-b"), None);
}
