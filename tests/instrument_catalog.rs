use std::cell::Cell;
use std::rc::Rc;

use trade_sim_wasm::domain::market_data::{InstrumentCatalog, InstrumentCategory, Symbol};

#[test]
fn toggling_favorite_touches_exactly_one_instrument() {
    let mut catalog = InstrumentCatalog::seeded();
    let before = catalog.instruments().to_vec();
    let target = Symbol::from("BTC/USD");

    assert!(catalog.toggle_favorite(&target));

    for (old, new) in before.iter().zip(catalog.instruments()) {
        if new.symbol == target {
            assert!(new.favorite);
            assert_eq!(new.bid, old.bid);
            assert_eq!(new.ask, old.ask);
        } else {
            assert_eq!(new, old, "{} changed on an unrelated toggle", new.symbol.value());
        }
    }

    // Toggling back restores the original record
    assert!(catalog.toggle_favorite(&target));
    assert_eq!(catalog.instruments(), &before[..]);
}

#[test]
fn toggling_unknown_symbol_is_rejected() {
    let mut catalog = InstrumentCatalog::seeded();
    let before = catalog.instruments().to_vec();

    assert!(!catalog.toggle_favorite(&Symbol::from("NOPE/USD")));
    assert_eq!(catalog.instruments(), &before[..]);
}

#[test]
fn category_filter_partitions_the_catalog() {
    use strum::IntoEnumIterator;

    let catalog = InstrumentCatalog::seeded();
    let mut total = 0;
    for category in InstrumentCategory::iter() {
        let subset = catalog.by_category(category);
        assert!(!subset.is_empty(), "no seeded instruments for {category}");
        assert!(subset.iter().all(|instrument| instrument.category == category));
        total += subset.len();
    }
    assert_eq!(total, catalog.instruments().len());
}

#[test]
fn seeded_quotes_are_coherent() {
    let catalog = InstrumentCatalog::seeded();
    for instrument in catalog.instruments() {
        assert!(instrument.ask >= instrument.bid, "{} seeded crossed", instrument.symbol.value());
        assert_eq!(instrument.spread.value(), instrument.ask.value() - instrument.bid.value());
        assert!(!instrument.favorite);
    }
}

#[test]
fn observers_see_every_mutation() {
    let mut catalog = InstrumentCatalog::seeded();
    let notifications = Rc::new(Cell::new(0usize));

    let seen = Rc::clone(&notifications);
    catalog.subscribe(move |instruments| {
        assert!(!instruments.is_empty());
        seen.set(seen.get() + 1);
    });

    catalog.toggle_favorite(&Symbol::from("AAPL"));
    assert_eq!(notifications.get(), 1);

    catalog.update_all(|instrument| instrument.change += 0.1);
    assert_eq!(notifications.get(), 2);

    // A rejected toggle must not notify
    catalog.toggle_favorite(&Symbol::from("NOPE/USD"));
    assert_eq!(notifications.get(), 2);
}

#[test]
fn favorites_view_follows_the_flags() {
    let mut catalog = InstrumentCatalog::seeded();
    assert!(catalog.favorites().is_empty());

    catalog.toggle_favorite(&Symbol::from("EUR/USD"));
    catalog.toggle_favorite(&Symbol::from("XAU/USD"));

    let favorites: Vec<_> =
        catalog.favorites().iter().map(|i| i.symbol.value().to_string()).collect();
    assert_eq!(favorites, vec!["EUR/USD", "XAU/USD"]);
}
