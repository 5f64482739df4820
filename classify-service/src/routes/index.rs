use crate::models::responses::Page;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
};
use quick_xml::escape::escape;
use serde::Deserialize;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub name: Option<String>,
}

pub async fn index_page(
    Query(params): Query<IndexParams>,
    State(state): State<AppState>,
) -> Html<String> {
    let db_status = state.store.test_connection().await.is_ok();
    let page = Page::new(params.name, db_status);

    Html(render_index(&page))
}

pub fn render_index(page: &Page) -> String {
    INDEX_TEMPLATE
        .replace("{{db_status}}", if page.db_status { "true" } else { "false" })
        .replace("{{name}}", &escape(&page.name))
}
