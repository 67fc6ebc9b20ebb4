//! HTML index of every documented route.
//!
//! Rendered once at startup from the generated OpenAPI document, so it lists exactly
//! what the router serves.

use utoipa::openapi::{path::PathItem, OpenApi};

/// Renders the sitemap page.
///
/// Paths without parameters that answer GET are rendered as links.
pub fn render(api: &OpenApi) -> String {
    let mut rows = String::new();

    for (path, item) in api.paths.paths.iter() {
        let methods = methods(item).join(", ");
        let linkable = item.get.is_some() && !path.contains('{');

        let target = if linkable {
            format!("<a href=\"{path}\">{path}</a>")
        } else {
            path.clone()
        };

        rows.push_str(&format!("<li>{target} <small>{methods}</small></li>\n"));
    }

    format!(
        "<!doctype html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <h1>{title}</h1>\n<p>API docs: <a href=\"/swagger-ui\">/swagger-ui</a></p>\n\
         <ul>\n{rows}</ul>\n</body>\n</html>\n",
        title = api.info.title,
    )
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    let mut methods = Vec::new();
    if item.get.is_some() {
        methods.push("GET");
    }
    if item.post.is_some() {
        methods.push("POST");
    }
    if item.put.is_some() {
        methods.push("PUT");
    }
    if item.delete.is_some() {
        methods.push("DELETE");
    }
    methods
}

#[cfg(test)]
mod tests {
    use utoipa::openapi::{
        path::{HttpMethod, OperationBuilder, PathItem, PathsBuilder},
        InfoBuilder, OpenApiBuilder,
    };

    use super::*;

    #[test]
    fn links_parameterless_get_routes_only() {
        let api = OpenApiBuilder::new()
            .info(InfoBuilder::new().title("starwars-api").version("0.1.0").build())
            .paths(
                PathsBuilder::new()
                    .path(
                        "/people",
                        PathItem::new(HttpMethod::Get, OperationBuilder::new().build()),
                    )
                    .path(
                        "/people/{id}",
                        PathItem::new(HttpMethod::Delete, OperationBuilder::new().build()),
                    ),
            )
            .build();

        let html = render(&api);

        assert!(html.contains("<a href=\"/people\">/people</a>"));
        assert!(html.contains("<li>/people/{id} <small>DELETE</small></li>"));
        assert!(html.contains("<title>starwars-api</title>"));
    }
}
