//! HTML rendering. Pages are assembled as strings from typed view data; the
//! values interpolated here were HTML-escaped once at form ingest, and
//! server-generated fields (ids, dates) contain no markup.

use axum::http::StatusCode;
use axum::response::Html;

use crate::logic::resolve::{BikeTypeDetail, BrandDetail, CatalogCounts, ModelDetail, ModelSummary};
use crate::logic::validate::FieldError;
use crate::model::{BikeType, Brand, Model, NewBikeType, NewBrand, NewModel};

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/public/style.css">
</head>
<body>
<div class="container">
<nav class="sidebar">
<ul>
<li><a href="/catalog">Home</a></li>
<li><a href="/catalog/models">All models</a></li>
<li><a href="/catalog/brands">All brands</a></li>
<li><a href="/catalog/biketypes">All bike types</a></li>
<li><a href="/catalog/model/create">Create new model</a></li>
<li><a href="/catalog/brand/create">Create new brand</a></li>
<li><a href="/catalog/biketype/create">Create new bike type</a></li>
</ul>
</nav>
<main class="content">
{body}
</main>
</div>
</body>
</html>
"#
    ))
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"form-errors\">\n");
    for error in errors {
        html.push_str(&format!("<li>{}</li>\n", error.message));
    }
    html.push_str("</ul>\n");
    html
}

pub fn index_page(counts: &CatalogCounts) -> Html<String> {
    let body = format!(
        "<h1>Moto Catalog Home</h1>\n\
         <p>Welcome to the motorcycle catalog.</p>\n\
         <h2>Dynamic content</h2>\n\
         <p>The catalog has the following record counts:</p>\n\
         <ul>\n\
         <li><strong>Models:</strong> {}</li>\n\
         <li><strong>Brands:</strong> {}</li>\n\
         <li><strong>Bike types:</strong> {}</li>\n\
         </ul>\n",
        counts.models, counts.brands, counts.biketypes
    );
    layout("Moto Catalog Home", &body)
}

// --- Brand pages ---

pub fn brand_list_page(brands: &[Brand]) -> Html<String> {
    let mut body = String::from("<h1>Brand List</h1>\n");
    if brands.is_empty() {
        body.push_str("<p>There are no brands.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for brand in brands {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a> <span class=\"muted\">{}</span></li>\n",
                brand.url(),
                brand.brand_name,
                brand.lifespan(),
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Brand List", &body)
}

pub fn brand_detail_page(detail: &BrandDetail) -> Html<String> {
    let mut body = format!(
        "<h1>Brand: {}</h1>\n<p class=\"muted\">{}</p>\n",
        detail.brand.brand_name,
        detail.brand.lifespan(),
    );
    body.push_str("<h2>Models</h2>\n");
    if detail.models.is_empty() {
        body.push_str("<p>This brand has no models.</p>\n");
    } else {
        body.push_str("<dl>\n");
        for model in &detail.models {
            body.push_str(&format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                model.url(),
                model.model_name,
                model.power,
            ));
        }
        body.push_str("</dl>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"{}/update\">Update Brand</a> | <a href=\"{}/delete\">Delete Brand</a></p>\n",
        detail.brand.url(),
        detail.brand.url(),
    ));
    layout(&format!("Brand: {}", detail.brand.brand_name), &body)
}

pub fn brand_form_page(title: &str, candidate: &NewBrand, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        "<h1>{title}</h1>\n\
         <form method=\"POST\">\n\
         <div class=\"form-group\">\n\
         <label for=\"brand_name\">Name:</label>\n\
         <input id=\"brand_name\" name=\"brand_name\" type=\"text\" placeholder=\"Brand name\" value=\"{}\">\n\
         </div>\n\
         <div class=\"form-group\">\n\
         <label for=\"founding_date\">Founding date:</label>\n\
         <input id=\"founding_date\" name=\"founding_date\" type=\"date\" value=\"{}\">\n\
         </div>\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n\
         {}",
        candidate.brand_name,
        candidate.founding_date_ymd(),
        error_list(errors),
    );
    layout(title, &body)
}

pub fn brand_delete_page(brand: &Brand, models: &[Model]) -> Html<String> {
    let mut body = format!(
        "<h1>Delete Brand: {}</h1>\n<p class=\"muted\">{}</p>\n",
        brand.brand_name,
        brand.lifespan(),
    );
    if models.is_empty() {
        body.push_str(
            "<p>Do you really want to delete this Brand?</p>\n\
             <form method=\"POST\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n",
        );
    } else {
        body.push_str(&format!(
            "<p><strong>Delete the following models before attempting to delete this brand.</strong></p>\n\
             <h2>Models ({})</h2>\n",
            models.len()
        ));
        body.push_str("<dl>\n");
        for model in models {
            body.push_str(&format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                model.url(),
                model.model_name,
                model.power,
            ));
        }
        body.push_str("</dl>\n");
    }
    layout("Delete Brand", &body)
}

// --- BikeType pages ---

pub fn biketype_list_page(biketypes: &[BikeType]) -> Html<String> {
    let mut body = String::from("<h1>BikeType List</h1>\n");
    if biketypes.is_empty() {
        body.push_str("<p>There are no bike types.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for biketype in biketypes {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                biketype.url(),
                biketype.name,
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("BikeType List", &body)
}

pub fn biketype_detail_page(detail: &BikeTypeDetail) -> Html<String> {
    let mut body = format!("<h1>BikeType: {}</h1>\n", detail.biketype.name);
    body.push_str("<h2>Models</h2>\n");
    if detail.models.is_empty() {
        body.push_str("<p>This type has no models.</p>\n");
    } else {
        body.push_str("<dl>\n");
        for model in &detail.models {
            body.push_str(&format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                model.url(),
                model.model_name,
                model.power,
            ));
        }
        body.push_str("</dl>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"{}/update\">Update BikeType</a> | <a href=\"{}/delete\">Delete BikeType</a></p>\n",
        detail.biketype.url(),
        detail.biketype.url(),
    ));
    layout(&format!("BikeType: {}", detail.biketype.name), &body)
}

pub fn biketype_form_page(
    title: &str,
    candidate: &NewBikeType,
    errors: &[FieldError],
) -> Html<String> {
    let body = format!(
        "<h1>{title}</h1>\n\
         <form method=\"POST\">\n\
         <div class=\"form-group\">\n\
         <label for=\"name\">BikeType:</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" placeholder=\"Cruiser, Sport, Touring ...\" value=\"{}\">\n\
         </div>\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n\
         {}",
        candidate.name,
        error_list(errors),
    );
    layout(title, &body)
}

pub fn biketype_delete_page(biketype: &BikeType, models: &[Model]) -> Html<String> {
    let mut body = format!("<h1>Delete BikeType: {}</h1>\n", biketype.name);
    if models.is_empty() {
        body.push_str(
            "<p>Do you really want to delete this BikeType?</p>\n\
             <form method=\"POST\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n",
        );
    } else {
        body.push_str(&format!(
            "<p><strong>Delete the following models before attempting to delete this bike type.</strong></p>\n\
             <h2>Models ({})</h2>\n",
            models.len()
        ));
        body.push_str("<dl>\n");
        for model in models {
            body.push_str(&format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                model.url(),
                model.model_name,
                model.power,
            ));
        }
        body.push_str("</dl>\n");
    }
    layout("Delete BikeType", &body)
}

// --- Model pages ---

pub fn model_list_page(summaries: &[ModelSummary]) -> Html<String> {
    let mut body = String::from("<h1>Model List</h1>\n");
    if summaries.is_empty() {
        body.push_str("<p>There are no models.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for summary in summaries {
            let brand_name = summary
                .brand
                .as_ref()
                .map(|b| b.brand_name.as_str())
                .unwrap_or("Unknown brand");
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a> <span class=\"muted\">({})</span></li>\n",
                summary.model.url(),
                summary.model.model_name,
                brand_name,
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Model List", &body)
}

pub fn model_detail_page(detail: &ModelDetail) -> Html<String> {
    let mut body = format!("<h1>Model: {}</h1>\n<dl>\n", detail.model.model_name);
    match &detail.brand {
        Some(brand) => body.push_str(&format!(
            "<dt>Brand</dt>\n<dd><a href=\"{}\">{}</a></dd>\n",
            brand.url(),
            brand.brand_name,
        )),
        None => body.push_str("<dt>Brand</dt>\n<dd>Unknown brand</dd>\n"),
    }
    body.push_str(&format!("<dt>Power</dt>\n<dd>{}</dd>\n", detail.model.power));
    body.push_str(&format!(
        "<dt>Video</dt>\n<dd><a href=\"{}\">{}</a></dd>\n",
        detail.model.yt_url, detail.model.yt_url,
    ));
    body.push_str("<dt>Type</dt>\n<dd>");
    if detail.biketypes.is_empty() {
        body.push_str("None");
    } else {
        let links: Vec<String> = detail
            .biketypes
            .iter()
            .map(|t| format!("<a href=\"{}\">{}</a>", t.url(), t.name))
            .collect();
        body.push_str(&links.join(", "));
    }
    body.push_str("</dd>\n</dl>\n");
    body.push_str(&format!(
        "<p><a href=\"{}/update\">Update Model</a> | <a href=\"{}/delete\">Delete Model</a></p>\n",
        detail.model.url(),
        detail.model.url(),
    ));
    layout(&format!("Model: {}", detail.model.model_name), &body)
}

/// Everything the model form needs: the full option sets plus the candidate
/// whose selections mark the pre-checked boxes.
pub struct ModelFormContext<'a> {
    pub title: &'a str,
    pub brands: &'a [Brand],
    pub biketypes: &'a [BikeType],
    pub candidate: &'a NewModel,
    pub errors: &'a [FieldError],
}

pub fn model_form_page(ctx: &ModelFormContext) -> Html<String> {
    let mut body = format!("<h1>{}</h1>\n<form method=\"POST\">\n", ctx.title);

    body.push_str(
        "<div class=\"form-group\">\n\
         <label for=\"model_name\">Name:</label>\n",
    );
    body.push_str(&format!(
        "<input id=\"model_name\" name=\"model_name\" type=\"text\" placeholder=\"Model name\" value=\"{}\">\n</div>\n",
        ctx.candidate.model_name,
    ));

    body.push_str(
        "<div class=\"form-group\">\n\
         <label for=\"brand\">Brand:</label>\n\
         <select id=\"brand\" name=\"brand\">\n",
    );
    for brand in ctx.brands {
        let selected = if brand.id == ctx.candidate.brand {
            " selected"
        } else {
            ""
        };
        body.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            brand.id, selected, brand.brand_name,
        ));
    }
    body.push_str("</select>\n</div>\n");

    body.push_str(&format!(
        "<div class=\"form-group\">\n\
         <label for=\"power\">Power:</label>\n\
         <input id=\"power\" name=\"power\" type=\"text\" placeholder=\"109 hp\" value=\"{}\">\n\
         </div>\n",
        ctx.candidate.power,
    ));
    body.push_str(&format!(
        "<div class=\"form-group\">\n\
         <label for=\"yt_url\">Video link:</label>\n\
         <input id=\"yt_url\" name=\"yt_url\" type=\"text\" placeholder=\"https://...\" value=\"{}\">\n\
         </div>\n",
        ctx.candidate.yt_url,
    ));

    body.push_str("<div class=\"form-group\">\n<label>Type:</label>\n");
    for biketype in ctx.biketypes {
        let checked = if ctx.candidate.biketype.contains(&biketype.id) {
            " checked"
        } else {
            ""
        };
        body.push_str(&format!(
            "<label class=\"checkbox\"><input type=\"checkbox\" name=\"biketype\" value=\"{}\"{}> {}</label>\n",
            biketype.id, checked, biketype.name,
        ));
    }
    body.push_str("</div>\n");

    body.push_str("<button type=\"submit\">Submit</button>\n</form>\n");
    body.push_str(&error_list(ctx.errors));
    layout(ctx.title, &body)
}

pub fn model_delete_page(model: &Model) -> Html<String> {
    let body = format!(
        "<h1>Delete Model: {}</h1>\n\
         <p>Do you really want to delete this Model?</p>\n\
         <form method=\"POST\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n",
        model.model_name,
    );
    layout("Delete Model", &body)
}

// --- Error page ---

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        status.canonical_reason().unwrap_or("Error"),
        message,
    );
    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generate_id;

    #[test]
    fn blocked_delete_page_lists_the_blocking_models() {
        let brand = Brand {
            id: generate_id(),
            brand_name: "Ducati".to_string(),
            founding_date: None,
        };
        let model = Model {
            id: generate_id(),
            model_name: "Monster 821".to_string(),
            brand: brand.id.clone(),
            power: "109 hp".to_string(),
            yt_url: "https://youtu.be/abc".to_string(),
            biketype: vec![],
        };

        let Html(page) = brand_delete_page(&brand, &[model.clone()]);
        assert!(page.contains("Delete the following models"));
        assert!(page.contains("Monster 821"));
        assert!(page.contains(&model.url()));
        // The confirm button is withheld while dependents remain.
        assert!(!page.contains("type=\"submit\""));
    }

    #[test]
    fn free_delete_page_offers_the_confirm_form() {
        let brand = Brand {
            id: generate_id(),
            brand_name: "Buell".to_string(),
            founding_date: None,
        };
        let Html(page) = brand_delete_page(&brand, &[]);
        assert!(page.contains("Do you really want to delete this Brand?"));
        assert!(page.contains("<form method=\"POST\">"));
    }

    #[test]
    fn model_form_premarks_the_candidate_selections() {
        let brands = vec![
            Brand {
                id: "b-1".to_string(),
                brand_name: "Ducati".to_string(),
                founding_date: None,
            },
            Brand {
                id: "b-2".to_string(),
                brand_name: "Honda".to_string(),
                founding_date: None,
            },
        ];
        let biketypes = vec![
            BikeType {
                id: "t-1".to_string(),
                name: "Sport".to_string(),
            },
            BikeType {
                id: "t-2".to_string(),
                name: "Naked".to_string(),
            },
        ];
        let candidate = NewModel {
            model_name: "Monster".to_string(),
            brand: "b-2".to_string(),
            power: "109 hp".to_string(),
            yt_url: "https://youtu.be/abc".to_string(),
            biketype: vec!["t-2".to_string()],
        };

        let Html(page) = model_form_page(&ModelFormContext {
            title: "Update Model",
            brands: &brands,
            biketypes: &biketypes,
            candidate: &candidate,
            errors: &[],
        });

        assert!(page.contains("<option value=\"b-2\" selected>Honda</option>"));
        assert!(page.contains("<option value=\"b-1\">Ducati</option>"));
        assert!(page.contains("value=\"t-2\" checked"));
        assert!(!page.contains("value=\"t-1\" checked"));
    }

    #[test]
    fn form_page_renders_messages_in_submission_order() {
        let candidate = NewBrand {
            brand_name: String::new(),
            founding_date: None,
        };
        let errors = vec![
            FieldError {
                field: "brand_name",
                message: "Brand name must be specified.",
            },
            FieldError {
                field: "brand_name",
                message: "Brand name has non-alphanumeric characters.",
            },
        ];
        let Html(page) = brand_form_page("Create Brand", &candidate, &errors);
        let first = page.find("Brand name must be specified.").unwrap();
        let second = page
            .find("Brand name has non-alphanumeric characters.")
            .unwrap();
        assert!(first < second);
    }
}
