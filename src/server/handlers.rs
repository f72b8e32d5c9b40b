use super::{
    controller::{UiController, View},
    page::render_page,
    types::{ErrorResponse, GenerateForm, GenerateRequest, HealthResponse},
};
use crate::blog::{BlogPost, MISSING_TOPIC_MESSAGE};
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub controller: UiController,
}

pub async fn index() -> Html<String> {
    debug!("Rendering blank page");
    Html(render_page("", None))
}

pub async fn generate_page(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> (StatusCode, Html<String>) {
    info!("Received page request for topic: {:?}", form.topic);

    let view = state.controller.on_generate(&form.topic).await;
    let status = match view {
        View::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };

    (status, Html(render_page(&form.topic, Some(&view))))
}

pub async fn generate_api(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<BlogPost>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received API request for topic: {:?}", request.topic);

    match state.controller.on_generate(&request.topic).await {
        View::Generated(post) => Ok(Json(post)),
        View::MissingTopic => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: MISSING_TOPIC_MESSAGE.to_string(),
            }),
        )),
        View::Failed { reason } => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: reason }),
        )),
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.controller.model(),
    })
}
