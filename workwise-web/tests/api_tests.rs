//! Integration tests for workwise-web API endpoints
//!
//! Each test drives the full router against its own on-disk database in a
//! TempDir, authenticating with tokens issued by /register.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`
use workwise_common::db::{
    bids, init_database, projects, reviews, sessions, users, NewProject, NewReview, ProjectStatus,
};
use workwise_common::Money;
use workwise_web::{build_router, AppState};

struct TestApp {
    _dir: TempDir,
    db: SqlitePool,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db = init_database(&dir.path().join("workwise.db")).await.unwrap();
        let router = build_router(AppState::new(db.clone()));
        Self {
            _dir: dir,
            db,
            router,
        }
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        (status, extract_json(response.into_body()).await)
    }

    /// Register an account and return (user id, token)
    async fn register(&self, email: &str, user_type: &str) -> (i64, String) {
        let (status, body) = self
            .send("POST", "/register", None, Some(registration(email, user_type)))
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);
        (
            body["user"]["id"].as_i64().unwrap(),
            body["token"].as_str().unwrap().to_string(),
        )
    }

    async fn post_job(&self, token: &str, skills: &[&str]) -> i64 {
        let (status, body) = self
            .send(
                "POST",
                "/jobs",
                Some(token),
                Some(json!({
                    "title": "Dive shop booking site",
                    "description": "Online booking for a Mactan dive shop",
                    "required_skills": skills,
                    "budget_min": "5000.00",
                    "budget_max": 15000,
                    "experience_level": "intermediate",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "job post failed: {}", body);
        body["id"].as_i64().unwrap()
    }
}

fn registration(email: &str, user_type: &str) -> Value {
    json!({
        "first_name": "Juan",
        "last_name": "Dela Cruz",
        "email": email,
        "password": "correct-horse",
        "password_confirmation": "correct-horse",
        "barangay": "Pajo",
        "user_type": user_type,
        "terms_agreed": true,
        "marketing_emails": false,
    })
}

/// Extract JSON body from response; empty bodies become Null
async fn extract_json(body: Body) -> Value {
    let bytes = body.collect().await.expect("Should read body").to_bytes();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}

// =============================================================================
// Public endpoints
// =============================================================================

#[tokio::test]
async fn test_health_endpoint_no_auth_required() {
    let app = TestApp::new().await;
    let (status, body) = app.send("GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "workwise-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = TestApp::new().await;
    let (status, body) = app.send("GET", "/api/buildinfo", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["git_hash"].is_string());
    assert!(body["build_profile"].is_string());
}

#[tokio::test]
async fn test_barangay_list() {
    let app = TestApp::new().await;
    let (status, body) = app.send("GET", "/api/barangays", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Lapu-Lapu City");
    let barangays = body["barangays"].as_array().unwrap();
    assert_eq!(barangays.len(), 29);
    assert_eq!(barangays[0], "Agus");
    assert_eq!(barangays[28], "Yapak");
}

#[tokio::test]
async fn test_register_page_is_html() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .uri("/register")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let page = extract_json(response.into_body()).await;
    let page = page.as_str().unwrap();
    assert!(page.contains(r#"<option value="Marigondon">Marigondon</option>"#));
    assert!(page.contains("toggle-password"));
}

// =============================================================================
// Registration and sessions
// =============================================================================

#[tokio::test]
async fn test_register_returns_user_and_token() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send("POST", "/register", None, Some(registration("Juan@Example.com", "client")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "juan@example.com");
    assert_eq!(body["user"]["city"], "Lapu-Lapu City");
    assert_eq!(body["user"]["user_type"], "client");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
    assert_eq!(body["token"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_register_without_terms_is_rejected() {
    let app = TestApp::new().await;
    let mut form = registration("juan@example.com", "freelancer");
    form["terms_agreed"] = json!(false);

    let (status, body) = app.send("POST", "/register", None, Some(form)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"]["terms_agreed"],
        "You must agree to the Terms of Service and Privacy Policy."
    );
    assert!(!users::email_exists(&app.db, "juan@example.com").await.unwrap());
}

#[tokio::test]
async fn test_register_reports_all_field_errors() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(
            "POST",
            "/register",
            None,
            Some(json!({
                "email": "nope",
                "password": "short",
                "password_confirmation": "short",
                "barangay": "Lahug",
                "terms_agreed": true,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_object().unwrap();
    for field in ["first_name", "last_name", "email", "password", "barangay"] {
        assert!(errors.contains_key(field), "missing {}", field);
    }
    assert!(!body.to_string().contains("short"), "password echoed back");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.register("juan@example.com", "freelancer").await;

    let (status, body) = app
        .send("POST", "/register", None, Some(registration("JUAN@example.com", "client")))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["email"], "The email has already been taken.");
}

#[tokio::test]
async fn test_login_and_logout() {
    let app = TestApp::new().await;
    let (user_id, _) = app.register("juan@example.com", "freelancer").await;

    let (status, body) = app
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "juan@example.com", "password": "wrong-password"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["email"].is_string());

    let (status, body) = app
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "Juan@Example.com", "password": "correct-horse"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user_id);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, _) = app.send("POST", "/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.send("GET", "/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_unknown_email_rejected_like_wrong_password() {
    let app = TestApp::new().await;
    app.register("juan@example.com", "freelancer").await;

    let (unknown_status, unknown_body) = app
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "nobody@example.com", "password": "correct-horse"})),
        )
        .await;
    let (wrong_status, wrong_body) = app
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "juan@example.com", "password": "not-it"})),
        )
        .await;

    assert_eq!(unknown_status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(unknown_status, wrong_status);
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_expired_session_is_unauthenticated() {
    let app = TestApp::new().await;
    let (user_id, live_token) = app.register("juan@example.com", "freelancer").await;
    let expired = sessions::create_session_with_ttl(&app.db, user_id, chrono::Duration::seconds(-60))
        .await
        .unwrap();

    let (status, body) = app.send("GET", "/profile", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");

    let (status, _) = app.send("GET", "/profile", Some(&live_token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new().await;
    for (method, uri) in [
        ("GET", "/profile"),
        ("GET", "/ai/recommendations"),
        ("GET", "/ai/insights"),
        ("GET", "/ai/job-suggestions"),
        ("GET", "/ai/jobs/1/matching-freelancers"),
        ("GET", "/jobs/1"),
        ("GET", "/bids/1"),
    ] {
        let (status, _) = app.send(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }

    let (status, _) = app.send("GET", "/profile", Some("forged-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Profile
// =============================================================================

#[tokio::test]
async fn test_profile_update_rejects_negative_rate() {
    let app = TestApp::new().await;
    let (_, token) = app.register("dev@example.com", "freelancer").await;

    let (status, body) = app
        .send("PUT", "/profile", Some(&token), Some(json!({"hourly_rate": -1})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["hourly_rate"].is_string());
}

#[tokio::test]
async fn test_complete_profile_scores_100() {
    let app = TestApp::new().await;
    let (client_id, client_token) = app.register("client@example.com", "client").await;
    let (freelancer_id, token) = app.register("dev@example.com", "freelancer").await;

    let (status, profile) = app
        .send(
            "PUT",
            "/profile",
            Some(&token),
            Some(json!({
                "bio": "Web developer in Mactan building booking sites for resorts.",
                "skills": ["PHP", "React", "SEO"],
                "hourly_rate": 25,
                "portfolio_url": "https://example.com/juan",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["skills"], json!(["PHP", "React", "SEO"]));

    let job_id = app.post_job(&client_token, &["PHP"]).await;
    let project = projects::create_project(
        &app.db,
        &NewProject {
            job_id,
            client_id,
            freelancer_id,
            agreed_amount: Money::from_cents(1_000_000),
            status: ProjectStatus::Completed,
        },
    )
    .await
    .unwrap();
    for rating in [5, 5, 4, 5, 4, 5] {
        reviews::create_review(
            &app.db,
            &NewReview {
                project_id: project.id,
                reviewer_id: client_id,
                reviewee_id: freelancer_id,
                rating,
                comment: None,
            },
        )
        .await
        .unwrap();
    }

    let (status, body) = app.send("GET", "/ai/insights", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile_score"]["score"], 100);
    assert_eq!(body["profile_score"]["max_score"], 100);
    assert_eq!(body["profile_score"]["percentage"], 100);
    assert_eq!(body["profile_score"]["suggestions"], json!([]));
    assert_eq!(body["earning_potential"]["current_rate"], 25.0);
    assert_eq!(
        body["skill_gaps"]["missing_high_demand_skills"],
        json!(["laravel", "node.js", "python", "aws", "docker"])
    );
}

#[tokio::test]
async fn test_strong_freelancer_earning_potential() {
    let app = TestApp::new().await;
    let (id, token) = app.register("dev@example.com", "freelancer").await;
    app.send("PUT", "/profile", Some(&token), Some(json!({"hourly_rate": 20})))
        .await;
    users::set_performance(&app.db, id, 96.0, 4.9).await.unwrap();

    let (status, body) = app.send("GET", "/ai/insights", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let potential = &body["earning_potential"];
    assert_eq!(potential["potential_rate"], 26.0);
    assert_eq!(potential["monthly_potential"], 4160.0);
    assert_eq!(potential["improvement_needed"], true);
}

// =============================================================================
// Jobs and bids
// =============================================================================

#[tokio::test]
async fn test_freelancer_cannot_post_job() {
    let app = TestApp::new().await;
    let (_, token) = app.register("dev@example.com", "freelancer").await;

    let (status, body) = app
        .send(
            "POST",
            "/jobs",
            Some(&token),
            Some(json!({"title": "x", "description": "y", "budget_min": 1, "budget_max": 2})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN_ROLE");
}

#[tokio::test]
async fn test_bid_submission_and_visibility() {
    let app = TestApp::new().await;
    let (client_id, client_token) = app.register("client@example.com", "client").await;
    let (dev_id, dev_token) = app.register("dev@example.com", "freelancer").await;
    let (_, other_token) = app.register("other@example.com", "freelancer").await;

    let job_id = app.post_job(&client_token, &["React"]).await;

    let (status, job) = app
        .send("GET", &format!("/jobs/{}", job_id), Some(&dev_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["employer"]["id"], client_id);
    assert_eq!(job["budget_min"], "5000.00");
    assert_eq!(job["budget_max"], "15000.00");
    assert!(job["employer"].get("email").is_none());

    let bid_uri = format!("/jobs/{}/bids", job_id);
    let proposal = json!({
        "bid_amount": "12500.50",
        "proposal_message": "I have built three booking sites in Mactan.",
        "estimated_days": 14,
    });
    let (status, bid) = app
        .send("POST", &bid_uri, Some(&dev_token), Some(proposal.clone()))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", bid);
    assert_eq!(bid["status"], "pending");
    assert_eq!(bid["is_pending"], true);
    assert_eq!(bid["bid_amount"], "12500.50");
    assert_eq!(bid["freelancer"]["id"], dev_id);
    let bid_id = bid["id"].as_i64().unwrap();

    let (status, _) = app
        .send("POST", &bid_uri, Some(&dev_token), Some(proposal))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .send(
            "POST",
            &bid_uri,
            Some(&client_token),
            Some(json!({"bid_amount": 1, "proposal_message": "x", "estimated_days": 1})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, list) = app.send("GET", &bid_uri, Some(&client_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app.send("GET", &bid_uri, Some(&dev_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let bid_path = format!("/bids/{}", bid_id);
    let (status, detail) = app.send("GET", &bid_path, Some(&client_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["job"]["id"], job_id);
    assert_eq!(detail["freelancer"]["id"], dev_id);

    let (status, _) = app.send("GET", &bid_path, Some(&dev_token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.send("GET", &bid_path, Some(&other_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "Unauthorized");
}

#[tokio::test]
async fn test_concurrent_duplicate_bids_create_one() {
    let app = TestApp::new().await;
    let (_, client_token) = app.register("client@example.com", "client").await;
    let (_, dev_token) = app.register("dev@example.com", "freelancer").await;
    let job_id = app.post_job(&client_token, &["React"]).await;
    let uri = format!("/jobs/{}/bids", job_id);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let router = app.router.clone();
        let request = Request::builder()
            .method("POST")
            .uri(&uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", dev_token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "bid_amount": "9000.00",
                    "proposal_message": "Ready to start this week.",
                    "estimated_days": 7,
                })
                .to_string(),
            ))
            .unwrap();
        handles.push(tokio::spawn(async move {
            router.oneshot(request).await.unwrap().status()
        }));
    }

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    assert_eq!(created, 1, "statuses: {:?}", statuses);
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::CREATED || *s == StatusCode::CONFLICT));
    assert_eq!(bids::list_for_job(&app.db, job_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_closed_job_rejects_bids() {
    let app = TestApp::new().await;
    let (_, client_token) = app.register("client@example.com", "client").await;
    let (_, dev_token) = app.register("dev@example.com", "freelancer").await;
    let job_id = app.post_job(&client_token, &[]).await;

    let (status, _) = app
        .send("POST", &format!("/jobs/{}/close", job_id), Some(&dev_token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, job) = app
        .send("POST", &format!("/jobs/{}/close", job_id), Some(&client_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["status"], "closed");

    let (status, _) = app
        .send(
            "POST",
            &format!("/jobs/{}/bids", job_id),
            Some(&dev_token),
            Some(json!({"bid_amount": 100, "proposal_message": "Hi", "estimated_days": 2})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_job_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = app.register("client@example.com", "client").await;

    let (status, body) = app.send("GET", "/jobs/999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// AI endpoints
// =============================================================================

#[tokio::test]
async fn test_matching_freelancers_owner_only() {
    let app = TestApp::new().await;
    let (_, owner_token) = app.register("owner@example.com", "client").await;
    let (_, other_token) = app.register("other@example.com", "client").await;
    let (dev_id, dev_token) = app.register("dev@example.com", "freelancer").await;
    let (_, _) = app.register("designer@example.com", "freelancer").await;

    app.send(
        "PUT",
        "/profile",
        Some(&dev_token),
        Some(json!({"skills": ["react", "Laravel"]})),
    )
    .await;
    let job_id = app.post_job(&owner_token, &["React", "Laravel"]).await;
    let uri = format!("/ai/jobs/{}/matching-freelancers", job_id);

    let (status, body) = app.send("GET", &uri, Some(&other_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "Unauthorized");
    assert!(body.get("matches").is_none());

    let (status, body) = app.send("GET", &uri, Some(&owner_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 1);
    assert_eq!(body["job"]["id"], job_id);
    let best = &body["matches"][0];
    assert_eq!(best["freelancer"]["id"], dev_id);
    assert_eq!(best["match_score"], 60.0);
    assert_eq!(best["matching_skills"], json!(["React", "Laravel"]));
}

#[tokio::test]
async fn test_job_suggestions_freelancer_only() {
    let app = TestApp::new().await;
    let (_, client_token) = app.register("client@example.com", "client").await;
    let (_, dev_token) = app.register("dev@example.com", "freelancer").await;

    let (status, body) = app
        .send("GET", "/ai/job-suggestions", Some(&client_token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"]["message"],
        "Only freelancers can access job suggestions"
    );

    app.send("PUT", "/profile", Some(&dev_token), Some(json!({"skills": ["React"]})))
        .await;
    let matching = app.post_job(&client_token, &["React"]).await;
    let open = app.post_job(&client_token, &[]).await;
    let _unrelated = app.post_job(&client_token, &["Figma"]).await;

    let (status, body) = app
        .send("GET", "/ai/job-suggestions", Some(&dev_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_suggestions"], 2);
    assert_eq!(body["suggestions"][0]["job"]["id"], matching);
    assert_eq!(body["suggestions"][1]["job"]["id"], open);
}

#[tokio::test]
async fn test_recommendations_page_by_role() {
    let app = TestApp::new().await;
    let (_, client_token) = app.register("client@example.com", "client").await;
    let (dev_id, dev_token) = app.register("dev@example.com", "freelancer").await;
    app.post_job(&client_token, &[]).await;

    let (status, page) = app
        .send("GET", "/ai/recommendations", Some(&dev_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["component"], "AI/FreelancerRecommendations");
    assert_eq!(page["props"]["user"]["id"], dev_id);
    assert_eq!(page["props"]["recommendations"].as_array().unwrap().len(), 1);

    let (status, page) = app
        .send("GET", "/ai/recommendations", Some(&client_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["component"], "AI/ClientInsights");
    let insights = page["props"]["insights"].as_object().unwrap();
    let keys: Vec<&String> = insights.keys().collect();
    assert_eq!(
        keys,
        ["market_trends", "pricing_insights", "skill_demand", "hiring_tips"]
    );
}

#[tokio::test]
async fn test_client_insights_without_projects() {
    let app = TestApp::new().await;
    let (_, token) = app.register("client@example.com", "client").await;

    let (status, body) = app.send("GET", "/ai/insights", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hiring_success_rate"]["success_rate"], 0.0);
    assert_eq!(body["hiring_success_rate"]["total_projects"], 0);
    assert_eq!(body["hiring_success_rate"]["benchmark"], 85);
    assert_eq!(body["budget_optimization"]["average_project_cost"], 0.0);
    assert!(body["preferred_freelancer_types"]["skill_preferences"].is_array());
    assert!(body.get("profile_score").is_none());
}
