//! Dashboard controller flow tests.
//!
//! Exercises the session state machine against the mock API: the
//! three-way fetch join, the zero-price and upstream-error outcomes,
//! the debounced suggestion flow, and the stale-response guard. Timer
//! behavior runs under a paused tokio clock.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use std::sync::Arc;
use std::time::Duration;

use market_dashboard::api::mock::{MockMarketDataApi, SymbolFixture};
use market_dashboard::controller::{DashboardController, MarketData, Phase};
use market_dashboard::models::{NewsItem, Profile, Quote, QuotePayload, SearchResult};

fn fixture(price: f64) -> SymbolFixture {
    SymbolFixture {
        quote: QuotePayload {
            error: None,
            quote: Quote {
                c: price,
                d: 1.5,
                dp: 1.0,
                h: price + 1.0,
                l: price - 1.0,
                o: price - 0.5,
                pc: price - 1.5,
            },
        },
        profile: Profile {
            name: "Apple Inc".to_string(),
            ticker: "AAPL".to_string(),
            industry: "Technology".to_string(),
            ..Profile::default()
        },
        news: (0..8)
            .map(|i| NewsItem {
                id: i,
                headline: format!("Headline {i}"),
                ..NewsItem::default()
            })
            .collect(),
        delay: Duration::ZERO,
    }
}

fn search_results(count: usize) -> Vec<SearchResult> {
    (0..count)
        .map(|i| SearchResult {
            description: format!("Company {i}"),
            display_symbol: format!("SYM{i}"),
            symbol: format!("SYM{i}"),
            kind: "Common Stock".to_string(),
        })
        .collect()
}

fn make_controller() -> (Arc<MockMarketDataApi>, DashboardController<MockMarketDataApi>) {
    let api = Arc::new(MockMarketDataApi::new());
    let controller = DashboardController::new(Arc::clone(&api));
    (api, controller)
}

#[tokio::test]
async fn successful_cycle_stores_responses_unmodified() {
    let (api, controller) = make_controller();
    let stub = fixture(150.0);
    api.stub_symbol("AAPL", stub.clone());

    controller.select_symbol("AAPL").await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.symbol, "AAPL");
    assert_eq!(
        snapshot.phase,
        Phase::Ready(MarketData {
            quote: stub.quote.quote,
            profile: stub.profile,
            news: stub.news,
        })
    );
}

#[tokio::test]
async fn zero_price_reports_symbol_not_found() {
    let (api, controller) = make_controller();
    // Profile and news resolve fine; the all-zero quote decides the outcome.
    api.stub_symbol(
        "NOPE",
        SymbolFixture {
            profile: Profile {
                name: "Ghost Corp".to_string(),
                ..Profile::default()
            },
            ..SymbolFixture::default()
        },
    );

    controller.select_symbol("NOPE").await;

    assert_eq!(
        controller.snapshot().phase,
        Phase::Error("Symbol not found".to_string())
    );
}

#[tokio::test]
async fn upstream_error_message_takes_precedence_over_zero_price() {
    let (api, controller) = make_controller();
    api.stub_symbol(
        "AAPL",
        SymbolFixture {
            quote: QuotePayload {
                error: Some("You don't have access to this resource.".to_string()),
                quote: Quote::default(),
            },
            ..SymbolFixture::default()
        },
    );

    controller.select_symbol("AAPL").await;

    assert_eq!(
        controller.snapshot().phase,
        Phase::Error("You don't have access to this resource.".to_string())
    );
}

#[tokio::test]
async fn any_failed_fetch_fails_the_whole_cycle() {
    let (api, controller) = make_controller();
    api.stub_symbol("AAPL", fixture(150.0));
    api.fail_fetches(true);

    controller.select_symbol("AAPL").await;

    assert_eq!(
        controller.snapshot().phase,
        Phase::Error("Failed to fetch data".to_string())
    );
}

#[tokio::test]
async fn repeated_cycles_are_idempotent() {
    let (api, controller) = make_controller();
    api.stub_symbol("AAPL", fixture(150.0));

    controller.select_symbol("AAPL").await;
    let first = controller.snapshot();

    controller.select_symbol("AAPL").await;
    let second = controller.snapshot();

    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn debounce_burst_fires_one_search_for_final_input() {
    let (api, controller) = make_controller();
    api.stub_search(search_results(12));

    controller.input_changed("t");
    controller.input_changed("ts");
    controller.input_changed("tsl");

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(api.search_call_count(), 1);
    assert_eq!(api.last_search_query().as_deref(), Some("tsl"));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.suggestions.len(), 8);
    assert!(snapshot.suggestions_visible);
}

#[tokio::test(start_paused = true)]
async fn separate_bursts_each_fire_a_search() {
    let (api, controller) = make_controller();
    api.stub_search(search_results(2));

    controller.input_changed("t");
    tokio::time::sleep(Duration::from_millis(350)).await;

    controller.input_changed("ta");
    tokio::time::sleep(Duration::from_millis(350)).await;

    assert_eq!(api.search_call_count(), 2);
    assert_eq!(api.last_search_query().as_deref(), Some("ta"));
}

#[tokio::test(start_paused = true)]
async fn clearing_input_cancels_pending_suggestion_fetch() {
    let (api, controller) = make_controller();
    api.stub_search(search_results(2));

    controller.input_changed("t");
    controller.input_changed("");

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(api.search_call_count(), 0);
    let snapshot = controller.snapshot();
    assert!(snapshot.suggestions.is_empty());
    assert!(!snapshot.suggestions_visible);
}

#[tokio::test(start_paused = true)]
async fn suggestion_fetch_failure_is_silent() {
    let (api, controller) = make_controller();
    api.fail_search(true);

    controller.input_changed("tsla");
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(api.search_call_count(), 1);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.suggestions.is_empty());
    assert!(!snapshot.suggestions_visible);
}

#[tokio::test(start_paused = true)]
async fn stale_fetch_result_does_not_overwrite_newer_state() {
    let (api, controller) = make_controller();
    api.stub_symbol(
        "SLOW",
        SymbolFixture {
            delay: Duration::from_millis(500),
            ..fixture(100.0)
        },
    );
    api.stub_symbol("FAST", fixture(200.0));

    let slow_cycle = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.select_symbol("SLOW").await })
    };
    // Let the slow cycle claim its generation and park on its fetches.
    tokio::task::yield_now().await;

    controller.select_symbol("FAST").await;
    slow_cycle.await.unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.symbol, "FAST");
    match snapshot.phase {
        Phase::Ready(data) => assert_eq!(data.quote.c, 200.0),
        other => panic!("expected Ready for FAST, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_uppercases_trimmed_input() {
    let (api, controller) = make_controller();
    api.stub_symbol("TSLA", fixture(250.0));

    controller.input_changed("  tsla ");
    controller.submit().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.symbol, "TSLA");
    assert!(matches!(snapshot.phase, Phase::Ready(_)));
    assert!(!snapshot.suggestions_visible);
}

#[tokio::test]
async fn chosen_suggestion_symbol_is_used_verbatim() {
    let (api, controller) = make_controller();
    api.stub_symbol("Abc.V", fixture(42.0));

    controller.choose_suggestion("Abc.V").await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.symbol, "Abc.V");
    assert_eq!(snapshot.input, "Abc.V");
    assert!(matches!(snapshot.phase, Phase::Ready(_)));
}

#[tokio::test(start_paused = true)]
async fn blur_hides_suggestions_after_delay() {
    let (api, controller) = make_controller();
    api.stub_search(search_results(3));

    controller.input_changed("sym");
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(controller.snapshot().suggestions_visible);

    controller.blur();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let snapshot = controller.snapshot();
    assert!(!snapshot.suggestions_visible);
    assert!(!snapshot.suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn focus_cancels_pending_blur_hide() {
    let (api, controller) = make_controller();
    api.stub_search(search_results(3));

    controller.input_changed("sym");
    tokio::time::sleep(Duration::from_millis(350)).await;

    controller.blur();
    controller.focus();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(controller.snapshot().suggestions_visible);
}

#[tokio::test(start_paused = true)]
async fn selecting_symbol_hides_suggestions() {
    let (api, controller) = make_controller();
    api.stub_search(search_results(3));
    api.stub_symbol("SYM0", fixture(10.0));

    controller.input_changed("sym");
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(controller.snapshot().suggestions_visible);

    controller.choose_suggestion("SYM0").await;

    assert!(!controller.snapshot().suggestions_visible);
}
