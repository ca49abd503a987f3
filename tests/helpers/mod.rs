use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use fox2it::AppState;
use fox2it_contact::{SubmissionGateway, SubmissionPayload, SubmissionResult};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub struct TestGateway {
    pub result: SubmissionResult,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl TestGateway {
    pub fn succeed() -> Arc<Self> {
        Arc::new(Self {
            result: SubmissionResult::Success,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn fail() -> Arc<Self> {
        Arc::new(Self {
            result: SubmissionResult::Failure("relay refused".to_owned()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionGateway for TestGateway {
    async fn send(&self, _payload: SubmissionPayload) -> anyhow::Result<SubmissionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(self.result.clone())
    }
}

pub fn create_test_app(gateway: Arc<TestGateway>) -> Router {
    fox2it::create_app(AppState { gateway })
}

#[allow(dead_code)]
pub async fn post_contact(
    app: Router,
    form: &[(&str, &str)],
    partial: bool,
) -> anyhow::Result<(Response<Body>, String)> {
    let mut req = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if partial {
        req = req.header("ts-request", "true");
    }

    let req = req.body(Body::from(serde_urlencoded::to_string(form)?))?;

    send(app, req).await
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> anyhow::Result<(Response<Body>, String)> {
    let req = Request::builder().uri(uri).body(Body::empty())?;

    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> anyhow::Result<(Response<Body>, String)> {
    let resp = app.oneshot(req).await?;
    let (parts, body) = resp.into_parts();
    let bytes = body.collect().await?.to_bytes();
    let html = String::from_utf8(bytes.to_vec())?;

    Ok((Response::from_parts(parts, Body::empty()), html))
}
