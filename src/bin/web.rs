//! Single binary web server: operator page from templates/, league API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, ADMIN_PASSWORD, MATCHES_PER_ROUND, ROSTER_CSV, SECURE_COOKIES.

use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post,
    web::{self, Data, Json, Path, Query},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use league_day_web::{
    compute_standings, regenerate_schedule,
    sheets::{import_roster, read_roster, standings_csv},
    submit_match_result, ApiError, Bonuses, Config, League, Match, MatchId, MatchResult, TeamId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory league: roster + current schedule. Every mutation happens under the write lock.
type AppState = Data<RwLock<League>>;

const ADMIN_SESSION_KEY: &str = "admin";

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTeamBody {
    team_name: String,
    leader_name: String,
    /// Up to four member names besides the leader.
    #[serde(default)]
    members: Vec<String>,
}

#[derive(Deserialize)]
struct LoginBody {
    password: String,
}

/// `?key=` fallback for the admin password.
#[derive(Deserialize)]
struct AdminKeyQuery {
    key: Option<String>,
}

#[derive(Deserialize)]
struct ResultBody {
    winner_team_id: TeamId,
    #[serde(default)]
    most_score_team_id: Option<TeamId>,
    #[serde(default)]
    most_kills_team_id: Option<TeamId>,
    #[serde(default)]
    most_assists_team_id: Option<TeamId>,
}

impl From<ResultBody> for MatchResult {
    fn from(body: ResultBody) -> Self {
        MatchResult {
            winner: body.winner_team_id,
            bonuses: Bonuses {
                top_score: body.most_score_team_id,
                top_kills: body.most_kills_team_id,
                top_assists: body.most_assists_team_id,
            },
        }
    }
}

/// Path segment: match id (e.g. /api/match/{id}/result)
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// A match row plus the names of both sides, for the schedule view.
#[derive(Serialize)]
struct MatchView<'a> {
    #[serde(flatten)]
    game: &'a Match,
    team_a_name: Option<&'a str>,
    team_b_name: Option<&'a str>,
}

/// Admin if the session says so, or the password arrives via `x-admin-key` / `?key=`.
fn require_admin(req: &HttpRequest, session: &Session, config: &Config) -> Result<(), ApiError> {
    let logged_in = session
        .get::<bool>(ADMIN_SESSION_KEY)
        .map_err(|e| ApiError::Session(e.to_string()))?
        .unwrap_or(false);
    if logged_in {
        return Ok(());
    }
    let header_key = req
        .headers()
        .get("x-admin-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let query_key = Query::<AdminKeyQuery>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.into_inner().key);
    match header_key.or(query_key) {
        Some(key) if config.password_matches(&key) => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-day-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[post("/api/admin/login")]
async fn api_admin_login(
    session: Session,
    config: Data<Config>,
    body: Json<LoginBody>,
) -> Result<HttpResponse, ApiError> {
    if !config.password_matches(&body.password) {
        log::warn!("Rejected admin login");
        return Err(ApiError::Unauthorized);
    }
    session
        .insert(ADMIN_SESSION_KEY, true)
        .map_err(|e| ApiError::Session(e.to_string()))?;
    session.renew();
    log::info!("Admin logged in");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

#[post("/api/admin/logout")]
async fn api_admin_logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// List registered teams with their members, ordered by id.
#[get("/api/teams")]
async fn api_list_teams(state: AppState) -> Result<HttpResponse, ApiError> {
    let g = state.read().map_err(|_| ApiError::Lock)?;
    let mut teams = g.teams.clone();
    teams.sort_by_key(|t| t.id);
    Ok(HttpResponse::Ok().json(teams))
}

/// Register a team (open to everyone).
#[post("/api/teams")]
async fn api_create_team(state: AppState, body: Json<CreateTeamBody>) -> Result<HttpResponse, ApiError> {
    let mut g = state.write().map_err(|_| ApiError::Lock)?;
    let team_id =
        g.add_team_with_members(body.team_name.as_str(), body.leader_name.as_str(), &body.members)?;
    log::info!("Registered team {} ({})", team_id, body.team_name.trim());
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true, "team_id": team_id })))
}

/// Regenerate the whole schedule from the current roster (admin only).
#[post("/api/schedule/generate")]
async fn api_generate_schedule(
    req: HttpRequest,
    session: Session,
    state: AppState,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req, &session, &config)?;
    let mut g = state.write().map_err(|_| ApiError::Lock)?;
    let schedule = regenerate_schedule(&mut g, config.matches_per_round)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "rounds": schedule.round_count(),
        "matches": schedule.matches.len(),
        "version": schedule.version,
    })))
}

/// Current schedule grouped by round, each match annotated with team names.
#[get("/api/schedule")]
async fn api_get_schedule(state: AppState) -> Result<HttpResponse, ApiError> {
    let g = state.read().map_err(|_| ApiError::Lock)?;
    let name_of = |id: Option<TeamId>| {
        id.and_then(|id| g.team(id))
            .map(|t| t.team_name.as_str())
    };
    let grouped: BTreeMap<u32, Vec<MatchView>> = g
        .schedule
        .by_round()
        .into_iter()
        .map(|(round, games)| {
            let views = games
                .into_iter()
                .map(|game| MatchView {
                    game,
                    team_a_name: name_of(game.team_a),
                    team_b_name: name_of(game.team_b),
                })
                .collect();
            (round, views)
        })
        .collect();
    Ok(HttpResponse::Ok().json(grouped))
}

/// Commit winner + bonus awards for one match (admin only). Locks the match.
#[post("/api/match/{id}/result")]
async fn api_commit_result(
    req: HttpRequest,
    session: Session,
    state: AppState,
    config: Data<Config>,
    path: Path<MatchPath>,
    body: Json<ResultBody>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req, &session, &config)?;
    let result = MatchResult::from(body.into_inner());
    let mut g = state.write().map_err(|_| ApiError::Lock)?;
    let updated = submit_match_result(&mut g, path.id, &result)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true, "match": updated })))
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> Result<HttpResponse, ApiError> {
    let g = state.read().map_err(|_| ApiError::Lock)?;
    let table = compute_standings(&g.teams, &g.schedule.matches);
    Ok(HttpResponse::Ok().json(table))
}

#[get("/api/standings.csv")]
async fn api_standings_csv(state: AppState) -> Result<HttpResponse, ApiError> {
    let table = {
        let g = state.read().map_err(|_| ApiError::Lock)?;
        compute_standings(&g.teams, &g.schedule.matches)
    };
    let body = standings_csv(&table)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(("Content-Disposition", "attachment; filename=\"standings.csv\""))
        .body(body))
}

/// Import the roster sheet named by ROSTER_CSV, if any. Failures are logged, not fatal.
async fn load_roster(config: &Config, league: &mut League) {
    let Some(path) = &config.roster_csv else {
        return;
    };
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Could not read roster {}: {}", path.display(), e);
            return;
        }
    };
    match read_roster(bytes.as_slice()).and_then(|entries| import_roster(league, &entries)) {
        Ok(ids) => log::info!("Imported {} team(s) from {}", ids.len(), path.display()),
        Err(e) => log::error!("Roster import from {} stopped: {}", path.display(), e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if config.uses_default_password() {
        log::warn!("ADMIN_PASSWORD is not set; using the default password");
    }

    let mut league = League::new();
    load_roster(&config, &mut league).await;

    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} ({} matches per round)",
        bind.0,
        bind.1,
        config.matches_per_round
    );

    let state = Data::new(RwLock::new(league));
    let secure_cookies = config.secure_cookies;
    let config = Data::new(config);
    let session_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(secure_cookies)
                    .build(),
            )
            .app_data(state.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_admin_login)
            .service(api_admin_logout)
            .service(api_list_teams)
            .service(api_create_team)
            .service(api_generate_schedule)
            .service(api_get_schedule)
            .service(api_commit_result)
            .service(api_standings)
            .service(api_standings_csv)
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
