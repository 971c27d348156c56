//! Shared test harness for E2E integration tests.
//!
//! Stands up wiremock doubles for the NLU service and the answer
//! store, then wires the real HTTP clients and the real resolver
//! through the real interactive loop against a scripted console.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pl_console::resolver::Resolver;
use pl_nlu::{HttpNluClient, NluConfig};
use pl_store::{HttpAnswerStore, StoreConfig};

/// End-to-end harness: one mock NLU service, one mock answer store.
pub struct TestHarness {
    pub nlu_server: MockServer,
    pub store_server: MockServer,
}

impl TestHarness {
    pub async fn start() -> Self {
        Self {
            nlu_server: MockServer::start().await,
            store_server: MockServer::start().await,
        }
    }

    /// A resolver over real HTTP clients pointed at the mock servers.
    pub fn resolver(&self) -> Resolver<HttpNluClient, HttpAnswerStore> {
        let nlu = HttpNluClient::new(NluConfig {
            base_url: self.nlu_server.uri(),
            access_token: "E2E_TOKEN".into(),
            api_version: "20170307".into(),
            timeout_secs: 2,
        });
        let store = HttpAnswerStore::new(StoreConfig {
            base_url: self.store_server.uri(),
            auth_token: None,
            namespace: "answers".into(),
            timeout_secs: 2,
        });
        Resolver::new(nlu, store)
    }

    /// Classification of `utterance` returns the given ranked intents
    /// (value, confidence) with no other entity kinds.
    pub async fn classify_as(&self, utterance: &str, intents: &[(&str, f64)]) {
        let candidates: Vec<_> = intents
            .iter()
            .map(|(value, confidence)| json!({"value": value, "confidence": confidence}))
            .collect();
        Mock::given(method("GET"))
            .and(path("/message"))
            .and(query_param("q", utterance))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_text": utterance,
                "entities": {"intent": candidates}
            })))
            .mount(&self.nlu_server)
            .await;
    }

    /// The training endpoint accepts exactly one sample labeling
    /// `utterance` with `intent_value`.
    pub async fn expect_sample(&self, utterance: &str, intent_value: &str) {
        Mock::given(method("POST"))
            .and(path("/samples"))
            .and(body_json(json!([
                {"text": utterance,
                 "entities": [{"entity": "intent", "value": intent_value}]}
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"n": 1})))
            .expect(1)
            .mount(&self.nlu_server)
            .await;
    }

    /// The store holds `value` under `key`.
    pub async fn store_has(&self, key: &str, value: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/answers/{key}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(value))
            .mount(&self.store_server)
            .await;
    }

    /// The store holds nothing under `key`.
    pub async fn store_missing(&self, key: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/answers/{key}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&self.store_server)
            .await;
    }

    /// The store must receive exactly one write of `value` under `key`.
    pub async fn expect_store_write(&self, key: &str, value: &str) {
        Mock::given(method("PUT"))
            .and(path(format!("/answers/{key}.json")))
            .and(body_json(value))
            .respond_with(ResponseTemplate::new(200).set_body_json(value))
            .expect(1)
            .mount(&self.store_server)
            .await;
    }
}
