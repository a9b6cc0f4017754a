use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use employee_panel::config::Config;
use employee_panel::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;
    let addr = config.server_addr();

    let state = AppState::new(config).map_err(|err| {
        error!("{}", err);
        std::io::Error::other(err.to_string())
    })?;
    let state = web::Data::new(state);

    info!("Starting server at {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(employee_panel::configure)
    })
    .bind(addr)?
    .run()
    .await
}
