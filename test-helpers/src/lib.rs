pub mod mock;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use payloads::{APIClient, FullPost, Post, requests, responses};
use serde::Deserialize;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// How the mock functions answer. Status codes outside 2xx make the matching
/// route fail with a plain text body.
#[derive(Debug, Clone)]
pub struct MockBehavior {
    pub posts: Vec<FullPost>,
    pub list_status: u16,
    /// Value of `success` in list and single post responses.
    pub success: bool,
    pub post_status: u16,
    pub feed_status: u16,
    pub proxy_status: u16,
    /// Replaces the generated RSS document when set.
    pub feed_body: Option<String>,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            posts: mock::sample_posts(3),
            list_status: 200,
            success: true,
            post_status: 200,
            feed_status: 200,
            proxy_status: 200,
            feed_body: None,
        }
    }
}

impl MockBehavior {
    pub fn with_posts(posts: Vec<FullPost>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }
}

/// A request as seen by the mock server.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Raw, still percent-encoded query string.
    pub query: String,
}

#[derive(Default)]
struct ServerState {
    behavior: MockBehavior,
    requests: Vec<RecordedRequest>,
    signups: Vec<requests::WaitlistSignup>,
}

/// Shared handle on the mock's behaviour and request log.
#[derive(Clone)]
pub struct MockServer {
    state: Arc<Mutex<ServerState>>,
}

impl MockServer {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            state: Arc::new(Mutex::new(ServerState {
                behavior,
                ..ServerState::default()
            })),
        }
    }

    fn record(&self, req: &HttpRequest) {
        self.state.lock().unwrap().requests.push(RecordedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            query: req.query_string().to_string(),
        });
    }

    fn behavior(&self) -> MockBehavior {
        self.state.lock().unwrap().behavior.clone()
    }
}

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub address: String,
    pub client: APIClient,
    pub server: MockServer,
}

impl TestApp {
    pub fn feed_url(&self) -> String {
        format!("{}/feed.xml", self.address)
    }

    pub fn proxy_url(&self) -> String {
        format!("{}/proxy", self.address)
    }

    /// Address that refuses connections, for exercising transport failures.
    pub fn unreachable_url(&self) -> String {
        "http://127.0.0.1:9/feed.xml".to_string()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.server.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn signups(&self) -> Vec<requests::WaitlistSignup> {
        self.server.state.lock().unwrap().signups.clone()
    }

    /// Change how the mock answers from now on.
    pub fn update_behavior(&self, f: impl FnOnce(&mut MockBehavior)) {
        f(&mut self.server.state.lock().unwrap().behavior);
    }
}

/// Install a fmt subscriber once per process. `RUST_LOG` overrides the
/// default filter.
pub fn init_logging(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer());

    let _ = LogTracer::init();
    let _ = subscriber.try_init();
}

/// Build the mock server on an already bound listener, but not await it.
pub fn build(listener: TcpListener, server: MockServer) -> std::io::Result<Server> {
    let data = web::Data::new(server);
    let running = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .route("/content", web::get().to(content))
            .route("/feed.xml", web::get().to(feed))
            .route("/proxy", web::get().to(proxy))
            .route("/waitlist", web::post().to(waitlist))
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok(running)
}

pub async fn spawn_app_on_port(port: u16, behavior: MockBehavior) -> TestApp {
    init_logging("error");

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(("127.0.0.1", port)).unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = MockServer::new(behavior);
    let running = build(listener, server.clone()).unwrap();
    tokio::spawn(running);

    let address = format!("http://127.0.0.1:{port}");
    TestApp {
        port,
        client: APIClient {
            content_url: format!("{address}/content"),
            waitlist_url: format!("{address}/waitlist"),
            inner_client: reqwest::Client::new(),
        },
        address,
        server,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app(behavior: MockBehavior) -> TestApp {
    spawn_app_on_port(0, behavior).await
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn failure(code: u16) -> Option<HttpResponse> {
    let code = status(code);
    (!code.is_success())
        .then(|| HttpResponse::build(code).body(format!("mock failure {code}")))
}

#[derive(Deserialize)]
struct ContentQuery {
    list: Option<String>,
    post: Option<usize>,
}

async fn content(
    server: web::Data<MockServer>,
    req: HttpRequest,
    query: web::Query<ContentQuery>,
) -> HttpResponse {
    server.record(&req);
    let behavior = server.behavior();

    if query.list.is_some() {
        if let Some(response) = failure(behavior.list_status) {
            return response;
        }
        // `latest=1` and a missing `post` both mean index 0
        let index = query.post.unwrap_or(0);
        let posts: Vec<Post> = if behavior.success {
            behavior.posts.iter().cloned().map(Post::from).collect()
        } else {
            Vec::new()
        };
        return HttpResponse::Ok().json(responses::PostList {
            success: behavior.success,
            posts,
            post: behavior
                .success
                .then(|| behavior.posts.get(index).cloned())
                .flatten(),
            cached: false,
            stale: false,
        });
    }

    let Some(index) = query.post else {
        return HttpResponse::BadRequest().body("expected list or post");
    };
    if let Some(response) = failure(behavior.post_status) {
        return response;
    }
    HttpResponse::Ok().json(responses::SinglePost {
        success: behavior.success,
        post: behavior.posts.get(index).cloned(),
    })
}

fn feed_document(behavior: &MockBehavior) -> String {
    behavior
        .feed_body
        .clone()
        .unwrap_or_else(|| mock::feed_xml(&behavior.posts))
}

async fn feed(server: web::Data<MockServer>, req: HttpRequest) -> HttpResponse {
    server.record(&req);
    let behavior = server.behavior();
    if let Some(response) = failure(behavior.feed_status) {
        return response;
    }
    HttpResponse::Ok()
        .content_type("application/rss+xml")
        .body(feed_document(&behavior))
}

#[derive(Deserialize)]
struct ProxyQuery {
    url: String,
}

async fn proxy(
    server: web::Data<MockServer>,
    req: HttpRequest,
    query: web::Query<ProxyQuery>,
) -> HttpResponse {
    server.record(&req);
    let behavior = server.behavior();
    if let Some(response) = failure(behavior.proxy_status) {
        return response;
    }
    if !query.url.ends_with("/feed.xml") {
        return HttpResponse::NotFound().json(responses::ProxyEnvelope {
            contents: None,
        });
    }
    HttpResponse::Ok().json(responses::ProxyEnvelope {
        contents: Some(feed_document(&behavior)),
    })
}

async fn waitlist(
    server: web::Data<MockServer>,
    req: HttpRequest,
    body: web::Json<requests::WaitlistSignup>,
) -> HttpResponse {
    server.record(&req);
    let signup = body.into_inner();

    if signup.email.ends_with("@taken.example") {
        return HttpResponse::Conflict().json(responses::ErrorMessage {
            message: Some("This email is already on the waitlist".into()),
            error: None,
        });
    }
    if signup.email.ends_with("@broken.example") {
        return HttpResponse::InternalServerError().body("upstream exploded");
    }

    server.state.lock().unwrap().signups.push(signup);
    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
