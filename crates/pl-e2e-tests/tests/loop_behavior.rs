//! E2E tests for loop-level properties: blank input, quit, and the
//! failure-isolation contract (one bad utterance never kills the loop).

mod helpers;

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use helpers::TestHarness;
use pl_console::console::{FAREWELL, run_interactive};
use pl_console::mock::ScriptedConsole;
use pl_console::resolver::Resolver;
use pl_nlu::MockNlu;
use pl_store::MockAnswerStore;

/// Blank lines never reach classification.
#[tokio::test]
async fn e2e_blank_lines_never_classify() {
    let nlu = MockNlu::new();
    let store = MockAnswerStore::new();
    let resolver = Resolver::new(nlu, store);

    let console = ScriptedConsole::with_inputs(&["", "   ", "\t ", "q"]);
    run_interactive(&console, &resolver).await;

    assert!(resolver.nlu().classify_calls().is_empty());
    assert_eq!(console.said(), vec![FAREWELL.to_string()]);
}

/// A failing NLU service produces one error line per utterance and the
/// loop keeps going; a later healthy utterance resolves normally.
#[tokio::test]
async fn e2e_service_failure_does_not_kill_loop() {
    let h = TestHarness::start().await;

    // First utterance: the NLU service 500s.
    Mock::given(method("GET"))
        .and(path("/message"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&h.nlu_server)
        .await;

    // Second utterance: healthy classification.
    h.classify_as("hello", &[("greet", 0.95)]).await;
    h.store_has("greet", "hi there!").await;

    let console = ScriptedConsole::with_inputs(&["broken one", "hello", "q"]);
    run_interactive(&console, &h.resolver()).await;

    assert!(console.said_containing("something went wrong"));
    assert!(console.said_containing("hi there!"));
    assert!(console.said().contains(&FAREWELL.to_string()));
}

/// An unreachable answer store fails the utterance, not the session.
#[tokio::test]
async fn e2e_store_outage_is_contained() {
    let h = TestHarness::start().await;
    h.classify_as("hello", &[("greet", 0.95)]).await;
    Mock::given(method("GET"))
        .and(path("/answers/greet.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&h.store_server)
        .await;

    let console = ScriptedConsole::with_inputs(&["hello", "q"]);
    run_interactive(&console, &h.resolver()).await;

    assert!(console.said_containing("something went wrong"));
    assert!(console.said().contains(&FAREWELL.to_string()));
}
