use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// GET /static/{*path} - files embedded at build time
pub async fn serve(Path(path): Path<String>) -> Response {
    let Some(content) = Assets::get(&path) else {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    (
        [
            (header::CONTENT_TYPE, mime.as_ref().to_owned()),
            (
                header::CACHE_CONTROL,
                "public, max-age=31536000, immutable".to_owned(),
            ),
        ],
        Body::from(content.data),
    )
        .into_response()
}
