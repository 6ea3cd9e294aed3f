use crate::blog::Post;
use axum::http::StatusCode;

fn options() -> comrak::Options {
    let mut options = comrak::Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // raw html stays disabled so post bodies can't inject markup
    options
}

pub fn markdown_to_html(markdown: &str) -> std::io::Result<String> {
    let options = options();
    let arena = comrak::Arena::new();
    let root = comrak::parse_document(&arena, markdown, &options);

    let mut html = Vec::new();
    comrak::format_html(root, &options, &mut html)?;

    String::from_utf8(html).map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}

/// Renders a post body off the async executor.
pub async fn post_body(post: &Post) -> Result<String, StatusCode> {
    let content = post.content.clone();

    match tokio::task::spawn_blocking(move || markdown_to_html(&content)).await {
        Ok(Ok(html)) => Ok(html),
        Ok(Err(err)) => {
            tracing::error!(post_id = %post.id, %err, "couldn't render markdown");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(err) => {
            tracing::error!(post_id = %post.id, %err, "markdown task failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
