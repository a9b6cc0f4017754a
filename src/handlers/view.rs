use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::errors::AppError;
use crate::pipeline::{PageView, SortCriterion};
use crate::services::dashboard::DashboardChange;
use crate::services::form::FormView;
use crate::state::AppState;
use crate::utils;

#[derive(Serialize, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Serialize, Debug)]
pub struct Nav {
    pub username: String,
    pub links: Vec<NavLink>,
}

impl Nav {
    pub fn for_user(username: &str) -> Self {
        Self {
            username: username.to_string(),
            links: vec![
                NavLink {
                    label: "Home",
                    href: "/v1/home",
                },
                NavLink {
                    label: "Employee List",
                    href: "/v1/dashboard",
                },
                NavLink {
                    label: "Logout",
                    href: "/v1/logout",
                },
            ],
        }
    }
}

#[derive(Serialize)]
pub struct HomeView {
    nav: Nav,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    nav: Nav,
    greeting: String,
    search: String,
    sort: SortCriterion,
    form: Option<FormView>,
    table: PageView,
}

pub async fn home(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = utils::session::require_session(&req, &state).await?;

    Ok(HttpResponse::Ok().json(HomeView {
        message: format!("Welcome to the Admin Panel, {}!", session.username),
        nav: Nav::for_user(&session.username),
    }))
}

pub async fn get_dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    render_dashboard(req, state, DashboardChange::default()).await
}

pub async fn update_dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
    change: web::Json<DashboardChange>,
) -> Result<HttpResponse, AppError> {
    render_dashboard(req, state, change.into_inner()).await
}

async fn render_dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
    change: DashboardChange,
) -> Result<HttpResponse, AppError> {
    let session = utils::session::require_session(&req, &state).await?;

    let records = state.employees.snapshot().await;
    let mut dashboard = state.dashboard.lock().await;
    let table = dashboard.update(change, records, state.config.page_size);
    let query = dashboard.query().clone();
    drop(dashboard);

    Ok(HttpResponse::Ok().json(DashboardView {
        nav: Nav::for_user(&session.username),
        greeting: format!("Hello, {}!", session.username),
        search: query.search,
        sort: query.sort,
        form: state.form.current().await,
        table,
    }))
}
