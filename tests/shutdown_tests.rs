//! End-to-end shutdown pass scenarios.
//!
//! All timing runs on tokio's paused clock: sleeps auto-advance, so the
//! backoff and deadline assertions are exact without real waiting.

mod support;

use std::sync::Arc;
use std::time::Duration;

use drainpipe::adapter::HandleMap;
use drainpipe::port::ShutdownReporter;
use drainpipe::testkit::handle::{NeverHandle, ScriptedHandle, SlowHandle};
use drainpipe::testkit::reporter::RecordingReporter;
use drainpipe::{ResourceToken, ShutdownConfig, ShutdownOptions, ShutdownOrchestrator, ShutdownSummary};

use support::{assert_partition, closed_events, failed_events, named_tokens};

fn harness() -> (ShutdownOrchestrator, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let orchestrator = ShutdownOrchestrator::new(Arc::clone(&reporter) as Arc<dyn ShutdownReporter>);
    (orchestrator, reporter)
}

fn config_with_timeout(timeout_ms: f64) -> ShutdownConfig {
    ShutdownConfig::resolve(&ShutdownOptions {
        timeout_ms: Some(timeout_ms),
        force_close: None,
    })
}

#[tokio::test(start_paused = true)]
async fn empty_pass_returns_zero_summary_and_stays_silent() {
    let (orchestrator, reporter) = harness();

    let summary = orchestrator
        .run(&[], &HandleMap::new(), &ShutdownConfig::default())
        .await;

    assert_eq!(summary, ShutdownSummary::default());
    assert!(reporter.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn two_clean_connections_close_immediately() {
    let map = HandleMap::new()
        .with("a", Arc::new(ScriptedHandle::succeeding()))
        .with("b", Arc::new(ScriptedHandle::succeeding()));
    let (orchestrator, reporter) = harness();

    let summary = orchestrator
        .run(&map.tokens(), &map, &ShutdownConfig::default())
        .await;

    assert_partition(&summary);
    assert_eq!(summary.total_connections, 2);
    assert_eq!(summary.success_count, 2);
    assert_eq!(summary.failure_count, 0);
    assert_eq!(summary.duration_ms, 0);

    let names = reporter.names();
    assert_eq!(names.first(), Some(&"shutdown.start"));
    assert_eq!(names.last(), Some(&"shutdown.complete"));
    assert_eq!(reporter.count_of("connection.closed"), 2);
}

#[tokio::test(start_paused = true)]
async fn transient_failures_recover_within_the_backoff_schedule() {
    let handle = Arc::new(ScriptedHandle::failing_times(2));
    let map = HandleMap::new().with("a", handle.clone());
    let (orchestrator, reporter) = harness();

    let summary = orchestrator
        .run(&named_tokens(&["a"]), &map, &ShutdownConfig::default())
        .await;

    assert_eq!(summary.success_count, 1);
    assert_eq!(handle.close_count(), 3);
    // Two backoff delays before the third attempt: 50ms + 100ms.
    assert!(summary.duration_ms >= 150);

    let closed = closed_events(&reporter.events());
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].0, ResourceToken::named("a"));
    assert!(closed[0].1 >= 150);
}

#[tokio::test(start_paused = true)]
async fn hung_close_times_out_without_hurting_its_sibling() {
    let map = HandleMap::new()
        .with("x", Arc::new(NeverHandle))
        .with("y", Arc::new(ScriptedHandle::succeeding()));
    let (orchestrator, reporter) = harness();

    let summary = orchestrator
        .run(&map.tokens(), &map, &config_with_timeout(100.0))
        .await;

    assert_partition(&summary);
    assert_eq!(summary.success_count, 1);
    assert_eq!(summary.failure_count, 1);

    let failed = failed_events(&reporter.events());
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, ResourceToken::named("x"));
    assert!(failed[0].1.contains("timeout"));
    assert!(failed[0].2.unwrap() >= 100);

    let closed = closed_events(&reporter.events());
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].0, ResourceToken::named("y"));
    assert_eq!(closed[0].1, 0);
}

#[tokio::test(start_paused = true)]
async fn unresolvable_token_fails_fast_beside_a_healthy_one() {
    let map = HandleMap::new().with("a", Arc::new(ScriptedHandle::succeeding()));
    let (orchestrator, reporter) = harness();

    let summary = orchestrator
        .run(&named_tokens(&["a", "bad"]), &map, &ShutdownConfig::default())
        .await;

    assert_partition(&summary);
    assert_eq!(summary.success_count, 1);
    assert_eq!(summary.failure_count, 1);

    let failed = failed_events(&reporter.events());
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, ResourceToken::named("bad"));
    assert_eq!(failed[0].1, "Invalid or missing wrapper");
    assert_eq!(failed[0].2, Some(0));
}

#[tokio::test(start_paused = true)]
async fn fifty_slow_connections_close_concurrently_not_sequentially() {
    let mut map = HandleMap::new();
    for i in 0..50 {
        map.insert(
            format!("conn-{i}"),
            Arc::new(SlowHandle::new(Duration::from_millis(100))),
        );
    }
    let (orchestrator, reporter) = harness();

    let summary = orchestrator
        .run(&map.tokens(), &map, &ShutdownConfig::default())
        .await;

    assert_partition(&summary);
    assert_eq!(summary.success_count, 50);
    // Sequential execution would take ~5000ms; concurrent takes ~100ms.
    assert!(summary.duration_ms >= 100);
    assert!(summary.duration_ms < 200);
    assert_eq!(reporter.count_of("connection.closed"), 50);
}

#[tokio::test(start_paused = true)]
async fn unique_tokens_keep_their_identity_in_events() {
    let anon = ResourceToken::unique();
    let map = HandleMap::new().with(anon.clone(), Arc::new(ScriptedHandle::succeeding()));
    let (orchestrator, reporter) = harness();

    let summary = orchestrator
        .run(&[anon.clone()], &map, &ShutdownConfig::default())
        .await;

    assert_eq!(summary.success_count, 1);
    let closed = closed_events(&reporter.events());
    assert_eq!(closed[0].0, anon);
}

#[tokio::test(start_paused = true)]
async fn garbage_options_still_shut_down_with_defaults() {
    let map = HandleMap::new().with("a", Arc::new(ScriptedHandle::succeeding()));
    let config = config_with_timeout(f64::NAN);
    assert_eq!(config.timeout_ms, 10_000);

    let (orchestrator, _) = harness();
    let summary = orchestrator.run(&map.tokens(), &map, &config).await;
    assert_eq!(summary.success_count, 1);
}

#[tokio::test(start_paused = true)]
async fn force_close_propagates_to_every_handle() {
    let first = Arc::new(ScriptedHandle::succeeding());
    let second = Arc::new(ScriptedHandle::succeeding());
    let map = HandleMap::new()
        .with("a", first.clone())
        .with("b", second.clone());
    let config = ShutdownConfig::resolve(&ShutdownOptions {
        timeout_ms: None,
        force_close: Some(true),
    });

    let (orchestrator, _) = harness();
    orchestrator.run(&map.tokens(), &map, &config).await;

    assert_eq!(first.forces(), vec![true]);
    assert_eq!(second.forces(), vec![true]);
}

#[tokio::test(start_paused = true)]
async fn every_connection_is_attempted_the_configured_number_of_times() {
    let broken = Arc::new(ScriptedHandle::always_failing("down"));
    let map = HandleMap::new().with("broken", broken.clone());
    let config = ShutdownConfig::default();

    let (orchestrator, reporter) = harness();
    let summary = orchestrator.run(&map.tokens(), &map, &config).await;

    assert_eq!(summary.failure_count, 1);
    assert_eq!(broken.close_count(), config.retry_attempts);
    let failed = failed_events(&reporter.events());
    assert_eq!(failed[0].1, "down");
}
