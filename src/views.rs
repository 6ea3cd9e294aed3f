use crate::blog::Post;
use maud::{html, Markup, PreEscaped, DOCTYPE};

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | devlog" }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                header {
                    nav {
                        a href="/" { "All posts" }
                        " "
                        a href="/new" { "New post" }
                    }
                }
                main { (body) }
            }
        }
    }
}

pub fn category_href(engine: &str) -> String {
    format!("/category/{}", urlencoding::encode(engine))
}

/// The post list, either everything or one category.
pub fn index(posts: &[Post], category: Option<&str>) -> Markup {
    let heading = match category {
        Some(engine) => format!("Posts in {engine}"),
        None => String::from("All posts"),
    };

    layout(
        &heading,
        html! {
            h1 { (heading) }
            @if posts.is_empty() {
                p.empty { "No posts yet." }
            }
            @for post in posts {
                article.post-summary {
                    @if let Some(image) = post.image_url() {
                        img src=(image) alt=(post.title);
                    }
                    h2 { a href={ "/posts/" (post.id) } { (post.title) } }
                    p.category { a href=(category_href(&post.engine)) { (post.engine) } }
                    div.actions {
                        a href={ "/edit/" (post.id) } { "Edit" }
                        form method="post" action={ "/delete/" (post.id) } {
                            button type="submit" { "Delete" }
                        }
                    }
                }
            }
        },
    )
}

/// A single post. `content_html` is trusted output of the markdown renderer.
pub fn post(post: &Post, content_html: &str) -> Markup {
    layout(
        &post.title,
        html! {
            article.post {
                h1 { (post.title) }
                p.category { a href=(category_href(&post.engine)) { (post.engine) } }
                @if let Some(image) = post.image_url() {
                    img src=(image) alt=(post.title);
                }
                div.content { (PreEscaped(content_html)) }
                footer {
                    time datetime=(post.created_at.to_rfc3339()) {
                        (post.created_at.format("%Y-%m-%d %H:%M UTC").to_string())
                    }
                    " "
                    a href={ "/edit/" (post.id) } { "Edit" }
                }
            }
        },
    )
}

/// Create form when `post` is `None`, edit form otherwise.
pub fn form(post: Option<&Post>) -> Markup {
    let (heading, action) = match post {
        Some(post) => ("Edit post", format!("/edit/{}", post.id)),
        None => ("New post", String::from("/new")),
    };
    let title = post.map_or("", |post| post.title.as_str());
    let engine = post.map_or("", |post| post.engine.as_str());
    let content = post.map_or("", |post| post.content.as_str());
    let image = post.and_then(|post| post.image.as_deref()).unwrap_or("");

    layout(
        heading,
        html! {
            h1 { (heading) }
            form method="post" action=(action) {
                label {
                    "Title"
                    input type="text" name="title" value=(title);
                }
                label {
                    "Engine"
                    input type="text" name="engine" value=(engine);
                }
                label {
                    "Content (Markdown)"
                    textarea name="content" rows="16" { (content) }
                }
                label {
                    "Image URL"
                    input type="text" name="image" value=(image);
                }
                button type="submit" { "Save" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(engine: &str) -> Post {
        Post {
            id: "0a1b".into(),
            title: "<Hello>".into(),
            engine: engine.into(),
            content: String::new(),
            image: Some(String::new()),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn category_links_are_percent_encoded() {
        assert_eq!(category_href("game maker"), "/category/game%20maker");
        assert_eq!(category_href("c/c++"), "/category/c%2Fc%2B%2B");
    }

    #[test]
    fn index_escapes_titles_and_skips_empty_images() {
        let html = index(&[post("go")], None).into_string();

        assert!(html.contains("&lt;Hello&gt;"));
        assert!(html.contains("href=\"/posts/0a1b\""));
        assert!(html.contains("action=\"/delete/0a1b\""));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let post = post("go");
        let html = form(Some(&post)).into_string();

        assert!(html.contains("action=\"/edit/0a1b\""));
        assert!(html.contains("value=\"&lt;Hello&gt;\""));
        assert!(html.contains("value=\"go\""));
    }

    #[test]
    fn image_field_accepts_free_text() {
        let post = Post {
            image: Some("not a url".into()),
            ..post("go")
        };
        let html = form(Some(&post)).into_string();

        assert!(html.contains("type=\"text\" name=\"image\" value=\"not a url\""));
        assert!(!html.contains("type=\"url\""));
    }

    #[test]
    fn new_form_posts_to_new() {
        let html = form(None).into_string();
        assert!(html.contains("action=\"/new\""));
    }
}
