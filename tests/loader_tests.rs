mod common;

use common::{FakeSource, september};
use rstaffdesk::core::loader::{LoadOutcome, LoadStatus, PageLoader};
use rstaffdesk::core::pagination::{PageQuery, TablePager};
use rstaffdesk::errors::AppError;
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Yield until the loader reports the gated request as in flight.
async fn wait_for_loading(loader: &PageLoader<FakeSource>) {
    for _ in 0..100 {
        if loader.view().is_loading() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("request never started");
}

#[tokio::test]
async fn test_first_page_is_applied() {
    let source = Arc::new(FakeSource::new(september(25)));
    let loader = PageLoader::new(source.clone(), TIMEOUT);
    let pager = TablePager::new(10).unwrap();

    let outcome = loader.load(pager.query()).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Applied);
    let view = loader.view();
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.result.rows.len(), 10);
    assert_eq!(view.result.total, 25);
    assert_eq!(view.query, Some(pager.query()));
}

#[tokio::test]
async fn test_stale_response_never_replaces_newer_query() {
    let source = Arc::new(FakeSource::new(september(25)));
    let loader = PageLoader::new(source.clone(), TIMEOUT);
    let mut pager = TablePager::new(10).unwrap();
    pager.record_total(25);

    let query_a = pager.query();
    pager.next();
    let query_b = pager.query();

    let gate_a = source.gate(query_a.page_index);
    let slow = loader.clone();
    let pending_a = tokio::spawn(async move { slow.load(query_a).await });
    wait_for_loading(&loader).await;

    let outcome_b = loader.load(query_b.clone()).await.unwrap();
    assert_eq!(outcome_b, LoadOutcome::Applied);

    // A's response arriving late must be discarded.
    gate_a.notify_one();
    assert_eq!(pending_a.await.unwrap().unwrap(), LoadOutcome::Superseded);

    let view = loader.view();
    assert_eq!(view.query, Some(query_b));
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.result.rows, september(25)[10..20].to_vec());
}

#[tokio::test]
async fn test_same_query_in_flight_is_not_issued_twice() {
    let source = Arc::new(FakeSource::new(september(5)));
    let loader = PageLoader::new(source.clone(), TIMEOUT);
    let query = TablePager::new(10).unwrap().query();

    let gate = source.gate(0);
    let first = loader.clone();
    let q = query.clone();
    let pending = tokio::spawn(async move { first.load(q).await });
    wait_for_loading(&loader).await;

    assert_eq!(
        loader.load(query).await.unwrap(),
        LoadOutcome::AlreadyInFlight
    );

    gate.notify_one();
    assert_eq!(pending.await.unwrap().unwrap(), LoadOutcome::Applied);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_previous_page_stays_visible_while_loading() {
    let source = Arc::new(FakeSource::new(september(25)));
    let loader = PageLoader::new(source.clone(), TIMEOUT);
    let mut pager = TablePager::new(10).unwrap();

    loader.load(pager.query()).await.unwrap();
    pager.record_total(loader.view().result.total);
    let first_rows = loader.view().result.rows;

    pager.next();
    let gate = source.gate(1);
    let bg = loader.clone();
    let q = pager.query();
    let pending = tokio::spawn(async move { bg.load(q).await });
    wait_for_loading(&loader).await;

    let view = loader.view();
    assert!(view.is_loading());
    assert_eq!(view.result.rows, first_rows);

    gate.notify_one();
    pending.await.unwrap().unwrap();
    assert_eq!(loader.view().result.rows, september(25)[10..20].to_vec());
}

#[tokio::test]
async fn test_without_keep_previous_the_page_blanks_while_loading() {
    let source = Arc::new(FakeSource::new(september(25)));
    let loader = PageLoader::new(source.clone(), TIMEOUT).keep_previous(false);
    let mut pager = TablePager::new(10).unwrap();

    loader.load(pager.query()).await.unwrap();
    pager.record_total(25);
    pager.next();

    let gate = source.gate(1);
    let bg = loader.clone();
    let q = pager.query();
    let pending = tokio::spawn(async move { bg.load(q).await });
    wait_for_loading(&loader).await;

    assert!(loader.view().result.is_empty());

    gate.notify_one();
    pending.await.unwrap().unwrap();
    assert_eq!(loader.view().result.rows.len(), 10);
}

#[tokio::test]
async fn test_failure_resets_to_empty_and_retry_recovers() {
    let source = Arc::new(FakeSource::new(september(25)));
    let loader = PageLoader::new(source.clone(), TIMEOUT);
    let query = TablePager::new(10).unwrap().query();

    loader.load(query.clone()).await.unwrap();
    assert_eq!(loader.view().result.rows.len(), 10);

    source.set_failing(true);
    let err = loader.load(query.clone()).await.unwrap_err();
    assert!(matches!(err, AppError::Api { status: 500, .. }));

    let view = loader.view();
    assert!(view.result.is_empty());
    assert_eq!(view.result.total, 0);
    assert!(matches!(view.status, LoadStatus::Failed(ref msg) if msg.contains("boom")));

    source.set_failing(false);
    assert_eq!(loader.load(query).await.unwrap(), LoadOutcome::Applied);
    assert_eq!(loader.view().status, LoadStatus::Ready);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_deadline_counts_as_failure() {
    let source = Arc::new(FakeSource::new(september(3)));
    let loader = PageLoader::new(source.clone(), Duration::from_secs(2));
    let _gate = source.gate(0);

    let err = loader
        .load(TablePager::new(10).unwrap().query())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Timeout(d) if d == Duration::from_secs(2)));
    assert!(matches!(loader.view().status, LoadStatus::Failed(_)));
}

#[tokio::test]
async fn test_missing_count_falls_back_to_rows() {
    let mut fake = FakeSource::new(september(25));
    fake.report_count = false;
    let loader = PageLoader::new(Arc::new(fake), TIMEOUT);

    loader.load(TablePager::new(5).unwrap().query()).await.unwrap();
    assert_eq!(loader.view().result.total, 5);
}

#[tokio::test]
async fn test_cancel_keeps_last_page() {
    let source = Arc::new(FakeSource::new(september(25)));
    let loader = PageLoader::new(source.clone(), TIMEOUT);
    let mut pager = TablePager::new(10).unwrap();
    let first = pager.query();

    loader.load(first.clone()).await.unwrap();
    pager.record_total(25);
    pager.next();

    let _gate = source.gate(1);
    let bg = loader.clone();
    let q = pager.query();
    let pending = tokio::spawn(async move { bg.load(q).await });
    wait_for_loading(&loader).await;

    loader.cancel();
    assert_eq!(pending.await.unwrap().unwrap(), LoadOutcome::Superseded);

    let view = loader.view();
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.result.rows, september(25)[..10].to_vec());
    // The view names the page it shows, not the abandoned one.
    assert_eq!(view.query, Some(first));
}

#[tokio::test]
async fn test_cancel_before_first_page_clears_query() {
    let source = Arc::new(FakeSource::new(september(5)));
    let loader = PageLoader::new(source.clone(), TIMEOUT);

    let _gate = source.gate(0);
    let bg = loader.clone();
    let pending = tokio::spawn(async move { bg.load(PageQuery::new(10).unwrap()).await });
    wait_for_loading(&loader).await;
    assert!(loader.view().query.is_some());

    loader.cancel();
    assert_eq!(pending.await.unwrap().unwrap(), LoadOutcome::Superseded);

    let view = loader.view();
    assert_eq!(view.status, LoadStatus::Idle);
    assert_eq!(view.query, None);
    assert!(view.result.rows.is_empty());
}
