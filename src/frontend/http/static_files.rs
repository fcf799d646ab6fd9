use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Response, StatusCode};

fn embedded(content_type: &'static str, body: &str) -> Response<String> {
    let mut response = Response::new(body.to_string());
    *response.status_mut() = StatusCode::OK;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

// Serve the search page
pub fn serve_index() -> Response<String> {
    embedded("text/html; charset=utf-8", include_str!("static/index.html"))
}

// Serve files from the embedded ./static directory by simple name matching
pub fn serve_asset(path: &str) -> Response<String> {
    match path {
        "app.js" => embedded(
            "application/javascript; charset=utf-8",
            include_str!("static/app.js"),
        ),
        "styles.css" => embedded("text/css; charset=utf-8", include_str!("static/styles.css")),
        _ => {
            let mut response = Response::new("Not Found".to_string());
            *response.status_mut() = StatusCode::NOT_FOUND;
            response.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            );
            response
        }
    }
}
