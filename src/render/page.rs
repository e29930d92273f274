use askama::Template;

pub const FORM_ID: &str = "seo-evaluation-form";
pub const URL_INPUT_ID: &str = "url-input";
pub const RESULTS_ID: &str = "results";

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    form_id: &'a str,
    input_id: &'a str,
    container_id: &'a str,
    url: &'a str,
    results: &'a str,
}

/// Whole document: the evaluation form plus the results container holding
/// already-rendered markup.
pub fn render_page(url: &str, results_markup: &str) -> askama::Result<String> {
    PageTemplate {
        form_id: FORM_ID,
        input_id: URL_INPUT_ID,
        container_id: RESULTS_ID,
        url,
        results: results_markup,
    }
    .render()
}
