//! HTTP surface: one handler per route, each turning a loader or action result
//! into a rendered page, a redirect, or the route's error boundary.
//!
//! Pages are rendered synchronously; nothing from the virtual DOM is held
//! across an `.await`.

use api::{ActionOutcome, RemarkEditorForm, RemarkList, RouteFailure, RouteParams};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use store::MemoryStore;
use tower_http::trace::TraceLayer;
use ui::{remark_edit_handlers, ErrorHandlers, RemarkOutlet};

#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/users/{user_id}", get(profile))
        .route("/users/{user_id}/remarks", get(remarks))
        .route(
            "/users/{user_id}/remarks/{remark_id}",
            get(remark_detail).post(remark_delete),
        )
        .route(
            "/users/{user_id}/remarks/{remark_id}/edit",
            get(remark_edit).post(remark_save),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn status_code(failure: &RouteFailure) -> StatusCode {
    StatusCode::from_u16(failure.response_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn user_params(user_id: &str) -> RouteParams {
    RouteParams::new().with("userId", user_id)
}

fn remark_params(user_id: &str, remark_id: &str) -> RouteParams {
    user_params(user_id).with("remarkId", remark_id)
}

/// The root error boundary, used when no layout could be loaded.
fn error_page(failure: RouteFailure, params: RouteParams) -> Response {
    let status = status_code(&failure);
    (status, Html(ui::render_error(failure, params, ErrorHandlers::new()))).into_response()
}

fn remarks_page(status: StatusCode, list: RemarkList, outlet: RemarkOutlet) -> Response {
    (status, Html(ui::render_remarks(list, outlet))).into_response()
}

/// Render a child route's failure inside the remark list layout.
fn outlet_failure(
    list: RemarkList,
    remark_id: String,
    failure: RouteFailure,
    params: RouteParams,
    handlers: ErrorHandlers,
) -> Response {
    let status = status_code(&failure);
    remarks_page(
        status,
        list,
        RemarkOutlet::Failure {
            remark_id,
            failure,
            params,
            handlers,
        },
    )
}

async fn index() -> Html<String> {
    Html(ui::render_index())
}

async fn profile(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match api::load_profile(&state.store, &user_id) {
        Ok(user) => Html(ui::render_profile(user)).into_response(),
        Err(failure) => error_page(failure, user_params(&user_id)),
    }
}

async fn remarks(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match api::load_remark_list(&state.store, &user_id) {
        Ok(list) => remarks_page(StatusCode::OK, list, RemarkOutlet::Empty),
        Err(failure) => error_page(failure, user_params(&user_id)),
    }
}

async fn remark_detail(
    State(state): State<AppState>,
    Path((user_id, remark_id)): Path<(String, String)>,
) -> Response {
    let list = match api::load_remark_list(&state.store, &user_id) {
        Ok(list) => list,
        Err(failure) => return error_page(failure, user_params(&user_id)),
    };

    match api::load_remark(&state.store, &remark_id) {
        Ok(remark) => remarks_page(StatusCode::OK, list, RemarkOutlet::Detail(remark)),
        Err(failure) => {
            let params = remark_params(&user_id, &remark_id);
            outlet_failure(list, remark_id, failure, params, ErrorHandlers::new())
        }
    }
}

async fn remark_delete(
    State(state): State<AppState>,
    Path((user_id, remark_id)): Path<(String, String)>,
) -> Response {
    let list = match api::load_remark_list(&state.store, &user_id) {
        Ok(list) => list,
        Err(failure) => return error_page(failure, user_params(&user_id)),
    };

    match api::delete_remark(&state.store, &user_id, &remark_id) {
        Ok(location) => Redirect::to(&location).into_response(),
        Err(failure) => {
            let params = remark_params(&user_id, &remark_id);
            outlet_failure(list, remark_id, failure, params, ErrorHandlers::new())
        }
    }
}

async fn remark_edit(
    State(state): State<AppState>,
    Path((user_id, remark_id)): Path<(String, String)>,
) -> Response {
    let list = match api::load_remark_list(&state.store, &user_id) {
        Ok(list) => list,
        Err(failure) => return error_page(failure, user_params(&user_id)),
    };

    match api::load_remark(&state.store, &remark_id) {
        Ok(remark) => {
            let values = RemarkEditorForm {
                title: remark.title,
                content: remark.content,
            };
            remarks_page(
                StatusCode::OK,
                list,
                RemarkOutlet::Editor {
                    remark_id,
                    values,
                    errors: Default::default(),
                },
            )
        }
        Err(failure) => {
            let params = remark_params(&user_id, &remark_id);
            outlet_failure(list, remark_id, failure, params, remark_edit_handlers())
        }
    }
}

async fn remark_save(
    State(state): State<AppState>,
    Path((user_id, remark_id)): Path<(String, String)>,
    Form(form): Form<RemarkEditorForm>,
) -> Response {
    let list = match api::load_remark_list(&state.store, &user_id) {
        Ok(list) => list,
        Err(failure) => return error_page(failure, user_params(&user_id)),
    };

    match api::save_remark(&state.store, &user_id, &remark_id, form) {
        Ok(ActionOutcome::Redirect(location)) => Redirect::to(&location).into_response(),
        Ok(ActionOutcome::Invalid { submission, errors }) => remarks_page(
            StatusCode::BAD_REQUEST,
            list,
            RemarkOutlet::Editor {
                remark_id,
                values: submission,
                errors,
            },
        ),
        Err(failure) => {
            let params = remark_params(&user_id, &remark_id);
            outlet_failure(list, remark_id, failure, params, remark_edit_handlers())
        }
    }
}

async fn not_found() -> Response {
    error_page(RouteFailure::not_found("Not found"), RouteParams::new())
}
