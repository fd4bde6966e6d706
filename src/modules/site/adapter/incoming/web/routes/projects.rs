use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::web::{layout_context, HtmlResponse, IncomingFlashes, PageRenderer};
use crate::AppState;

#[get("/projects")]
pub async fn projects_handler(
    session: Option<AdminSession>,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let projects = match data.project.get_list.execute().await {
        Ok(projects) => projects,
        Err(e) => {
            error!(error = %e, "Failed to list projects");
            return HtmlResponse::internal_error();
        }
    };

    let mut context = match layout_context(&data, session.as_ref()).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };
    context.insert("projects", &projects);

    pages.page("projects.html", context, &flashes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;
    use crate::tests::support::stubs::StubGetProjects;
    use crate::tests::support::web::{read_html, test_services};

    #[actix_web::test]
    async fn test_projects_page_lists_in_order() {
        let state = TestAppStateBuilder::default()
            .with_get_projects(StubGetProjects::returning(vec![
                sample_project(1),
                sample_project(2),
            ]))
            .build();
        let app = test::init_service(
            App::new()
                .configure(test_services(state))
                .service(projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let html = read_html(resp).await;
        let first = html.find("Sample project 1").unwrap();
        let second = html.find("Sample project 2").unwrap();
        assert!(first < second);
    }
}
