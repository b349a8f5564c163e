use crate::configuration::Settings;
use crate::health::HealthChecker;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let pg_pool_arc = Arc::new(pg_pool.clone());

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let health_checker = Arc::new(HealthChecker::new(pg_pool_arc));
    let health_checker = web::Data::new(health_checker);

    // Body deserialization failures become structured 400s instead of the
    // default plain-text response.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(
                web::scope("/api")
                    .service(routes::index_handler)
                    .service(routes::health_check)
                    .service(
                        web::scope("/status")
                            .service(routes::status::add_handler)
                            .service(routes::status::list_handler),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(health_checker.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
