use askama_axum::Template;

/// Template
/// HTML page definition, static content only
#[derive(Template)]
#[template(path = "index.html")]
pub struct PageTemplate {}

/// Get handler
/// Returns the index page using the dedicated HTML template
pub async fn get() -> PageTemplate {
    PageTemplate {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_the_index_template() {
        let page = get().await;
        let html = page.render().unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Express Carrier"));
    }

    #[tokio::test]
    async fn repeated_calls_render_identical_output() {
        let first = get().await.render().unwrap();
        let second = get().await.render().unwrap();

        assert_eq!(first, second);
    }
}
