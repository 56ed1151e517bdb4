use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use finance_tracker_backend::config::{
    CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
};
use finance_tracker_backend::core::errors::{AppResult, ErrorContext};
use finance_tracker_backend::db::Database;
use finance_tracker_backend::repositories::transactions::MongoTransactionRepository;
use finance_tracker_backend::repositories::users::MongoUserRepository;
use finance_tracker_backend::routes::configure_all_routes;
use finance_tracker_backend::services::transactions::TransactionService;
use finance_tracker_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> AppResult<()> {
    load_env_file();
    init_logging();

    info!("🚀 가계부 서비스 시작중... ({:?})", Environment::current());

    let database = initialize_database().await?;

    let user_repo = Arc::new(MongoUserRepository::new(database.clone()));
    let transaction_repo = Arc::new(MongoTransactionRepository::new(database));

    user_repo.create_indexes().await?;
    transaction_repo.create_indexes().await?;

    let user_service = web::Data::new(UserService::new(user_repo));
    let transaction_service = web::Data::new(TransactionService::new(transaction_repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service, transaction_service).await
}

async fn start_http_server(
    user_service: web::Data<UserService>,
    transaction_service: web::Data<TransactionService>,
) -> AppResult<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or("0이 아닌 값이어야 합니다")
        .context("Rate Limiting 설정 오류")?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env();

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .app_data(transaction_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)
    .with_context(|| format!("{} 바인딩 실패", bind_address))?
    .workers(server_config.workers)
    .run()
    .await
    .context("HTTP 서버 실행 오류")
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

async fn initialize_database() -> AppResult<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&DatabaseConfig::from_env())
        .await
        .inspect_err(|e| error!("데이터베이스 연결 실패: {}", e))?;

    info!("🗄️ 사용 데이터베이스: {}", database.database_name());
    Ok(Arc::new(database))
}

fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .max_age(config.max_age)
}
