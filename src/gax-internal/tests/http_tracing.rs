// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use google_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use google_cloud_gax_internal::options::ClientConfig;
    use httptest::matchers::*;
    use httptest::{Expectation, Server, responders::*};
    use reqwest::Method;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Subscriber, span};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    // Records the names of new spans and the levels of events.
    #[derive(Clone, Default)]
    struct Recorder {
        spans: Arc<Mutex<Vec<String>>>,
        events: Arc<Mutex<Vec<tracing::Level>>>,
    }

    impl<S: Subscriber> Layer<S> for Recorder {
        fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
            if let Ok(mut g) = self.spans.lock() {
                g.push(attrs.metadata().name().to_string());
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if let Ok(mut g) = self.events.lock() {
                g.push(*event.metadata().level());
            }
        }
    }

    async fn run(tracing: bool, status: u16) -> anyhow::Result<Recorder> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v4/advertisers/123"))
                .respond_with(status_code(status).body(json!({}).to_string())),
        );
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.tracing = tracing;
        let client = ReqwestClient::new(config, "https://test.googleapis.com").await?;

        let recorder = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let _guard = tracing::subscriber::set_default(subscriber);
        let builder = client.builder(Method::GET, "/v4/advertisers/123".into());
        let _ = client
            .execute::<NoBody, wkt::Empty>(builder, None, RequestOptions::default())
            .await;
        Ok(recorder)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn tracing_enabled() -> anyhow::Result<()> {
        let recorder = run(true, 200).await?;
        let spans = recorder.spans.lock().map(|g| g.clone()).unwrap_or_default();
        assert!(spans.iter().any(|s| s == "http_request"), "{spans:?}");
        let events = recorder.events.lock().map(|g| g.clone()).unwrap_or_default();
        assert!(events.contains(&tracing::Level::DEBUG), "{events:?}");
        assert!(!events.contains(&tracing::Level::WARN), "{events:?}");
        Ok(())
    }

    #[tokio::test(flavor = "current_thread")]
    async fn tracing_enabled_with_error() -> anyhow::Result<()> {
        let recorder = run(true, 500).await?;
        let events = recorder.events.lock().map(|g| g.clone()).unwrap_or_default();
        assert!(events.contains(&tracing::Level::WARN), "{events:?}");
        Ok(())
    }

    #[tokio::test(flavor = "current_thread")]
    #[serial_test::serial]
    async fn tracing_disabled() -> anyhow::Result<()> {
        let _e = scoped_env::ScopedEnv::remove("GOOGLE_CLOUD_RUST_LOGGING");
        let recorder = run(false, 200).await?;
        let spans = recorder.spans.lock().map(|g| g.clone()).unwrap_or_default();
        assert!(!spans.iter().any(|s| s == "http_request"), "{spans:?}");
        Ok(())
    }
}
