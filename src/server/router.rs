use axum::{response::Html, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, auth, favorite, people, planet, sitemap, user, vehicle},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "starwars-api", description = "Star Wars catalog with favorites and token auth"),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "Users and their favorites"),
        (name = "people", description = "Characters"),
        (name = "planet", description = "Planets"),
        (name = "vehicle", description = "Vehicles"),
        (name = "favorite", description = "Favorite links"),
        (name = "auth", description = "Login, logout and protected routes")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::delete_user))
        .routes(routes!(user::get_favorites))
        .routes(routes!(people::get_people, people::create_people))
        .routes(routes!(
            people::get_people_by_id,
            people::update_people,
            people::delete_people
        ))
        .routes(routes!(people::search_people))
        .routes(routes!(planet::get_planets))
        .routes(routes!(planet::create_planet))
        .routes(routes!(planet::get_planet, planet::delete_planet))
        .routes(routes!(vehicle::get_vehicles))
        .routes(routes!(vehicle::create_vehicle))
        .routes(routes!(vehicle::get_vehicle, vehicle::delete_vehicle))
        .routes(routes!(favorite::create_favorite))
        .routes(routes!(favorite::delete_favorite))
        .routes(routes!(auth::login))
        .routes(routes!(auth::hello_protected))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::suspend_user))
        .split_for_parts();

    let sitemap = sitemap::render(&api);

    router
        .route(
            "/",
            get(move || {
                let page = sitemap.clone();
                async move { Html(page) }
            }),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .fallback(controller::fallback)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
