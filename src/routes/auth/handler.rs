use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    activity::ActivityEvent,
    error::AppError,
    geolocation::{UNKNOWN_LOCATION, resolve_location},
    middleware::{ClientIp, UNKNOWN_IP},
    session::{Session, SessionData},
};

use super::model::{INVALID_LOGIN_ID, LoginForm, UNKNOWN_USER};

#[axum::debug_handler]
pub async fn index() -> Redirect {
    Redirect::to("/login")
}

#[axum::debug_handler]
pub async fn login_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.login_page(None)?))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    // 空登录ID：重新显示表单，不建立会话也不记录日志
    let Some(login_id) = form.login_id() else {
        return Ok(Html(state.views.login_page(Some(INVALID_LOGIN_ID))?).into_response());
    };

    let location = resolve_location(state.geolocation.as_ref(), &state.activity, &ip).await;
    let data = SessionData {
        login_id: login_id.to_string(),
        ip,
        location,
    };

    let jar = session.establish(&data)?;

    state
        .activity
        .record(ActivityEvent::Login {
            login_id: &data.login_id,
            ip: &data.ip,
            location: &data.location,
        })
        .await;

    Ok((jar, Redirect::to("/main")).into_response())
}

#[axum::debug_handler]
pub async fn main_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let Some(data) = session.data() else {
        return Ok(Redirect::to("/login").into_response());
    };

    tracing::debug!(sid = ?session.id(), "Main page visited by {}", data.login_id);

    state
        .activity
        .record(ActivityEvent::Visit {
            login_id: &data.login_id,
            ip: &data.ip,
            location: &data.location,
        })
        .await;

    Ok(Html(state.views.main_page(&data.login_id)?).into_response())
}

#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let data = session.data();
    let (login_id, ip, location) = match &data {
        Some(data) => (
            data.login_id.as_str(),
            data.ip.as_str(),
            data.location.as_str(),
        ),
        None => (UNKNOWN_USER, UNKNOWN_IP, UNKNOWN_LOCATION),
    };

    state
        .activity
        .record(ActivityEvent::Logout {
            login_id,
            ip,
            location,
        })
        .await;

    (session.clear(), Redirect::to("/login"))
}
