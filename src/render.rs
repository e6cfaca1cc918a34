//! HTML page builders. Every page lists its fields explicitly; there is no
//! reflection-driven rendering.

use axum::response::Html;

use crate::db::models::Cafe;
use crate::middleware::auth::secret_query;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link href="{BOOTSTRAP_CSS}" rel="stylesheet">
</head>
<body>
<div class="container py-4">
{body}
</div>
</body>
</html>"#,
        title = escape(title),
    ))
}

pub fn home_page() -> Html<String> {
    page(
        "Cafe Catalog",
        r#"<h1>Cafe Catalog</h1>
<p class="lead">A catalog of cafes worth working from.</p>
<a class="btn btn-primary" href="/cafes">Browse cafes</a>
<a class="btn btn-outline-primary" href="/add">Add a cafe</a>"#,
    )
}

pub fn add_page() -> Html<String> {
    let form = cafe_form("/add", None);
    page("Add Cafe", &format!("<h1>Add Cafe</h1>\n{form}"))
}

pub fn edit_page(cafe: &Cafe, secret: &str) -> Html<String> {
    let action = format!("/edit/{}?{}", cafe.id, secret_query(secret));
    let form = cafe_form(&action, Some(cafe));
    page(
        "Edit Cafe",
        &format!("<h1>Edit {}</h1>\n{form}", escape(&cafe.name)),
    )
}

pub fn cafes_page(cafes: &[Cafe], filter: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Cafes</h1>\n");
    body.push_str(&format!(
        r#"<form class="row g-2 mb-3" method="get" action="/cafes">
<div class="col-auto"><input class="form-control" type="text" name="name" placeholder="Search by name" value="{}"></div>
<div class="col-auto"><button class="btn btn-secondary" type="submit">Search</button></div>
</form>
"#,
        escape(filter.unwrap_or("")),
    ));

    if cafes.is_empty() {
        body.push_str("<p>No cafes found.</p>\n");
    } else {
        body.push_str(
            r#"<table class="table table-striped">
<thead><tr>
<th>Name</th><th>Address</th><th>Website</th><th>Map</th>
<th>Alcohol</th><th>Lunch</th><th>Rating</th><th>Price</th>
</tr></thead>
<tbody>
"#,
        );
        for cafe in cafes {
            body.push_str(&cafe_row(cafe));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str(r#"<a class="btn btn-primary" href="/add">Add a cafe</a>"#);
    page("Cafes", &body)
}

pub fn delete_page(cafes: &[Cafe], secret: &str) -> Html<String> {
    let action = format!("/delete?{}", secret_query(secret));
    let mut body = String::from("<h1>Delete Cafes</h1>\n");

    if cafes.is_empty() {
        body.push_str("<p>No cafes found.</p>\n");
    } else {
        body.push_str("<ul class=\"list-group\">\n");
        for cafe in cafes {
            body.push_str(&format!(
                r#"<li class="list-group-item d-flex justify-content-between align-items-center">{name}
<form method="post" action="{action}">
<input type="hidden" name="cafe_id" value="{id}">
<button class="btn btn-sm btn-danger" type="submit">Delete</button>
</form>
</li>
"#,
                name = escape(&cafe.name),
                id = cafe.id,
            ));
        }
        body.push_str("</ul>\n");
    }

    page("Delete Cafes", &body)
}

fn cafe_row(cafe: &Cafe) -> String {
    format!(
        r#"<tr>
<td>{name}</td>
<td>{address}</td>
<td><a href="{website}">{website}</a></td>
<td><a href="{map_url}">map</a></td>
<td>{has_alcohol}</td>
<td>{has_lunch}</td>
<td>{google_rate}</td>
<td>{price_range}</td>
</tr>
"#,
        name = escape(&cafe.name),
        address = escape(&cafe.address),
        website = escape(&cafe.website),
        map_url = escape(&cafe.map_url),
        has_alcohol = yes_no(cafe.has_alcohol),
        has_lunch = yes_no(cafe.has_lunch),
        google_rate = escape(cafe.google_rate.as_deref().unwrap_or("-")),
        price_range = escape(cafe.price_range.as_deref().unwrap_or("-")),
    )
}

/// Shared add/edit form. With a cafe, fields come pre-filled and the
/// checkboxes reflect the stored flags.
fn cafe_form(action: &str, cafe: Option<&Cafe>) -> String {
    let text = |field: fn(&Cafe) -> &str| cafe.map(field).map(escape).unwrap_or_default();
    let opt = |field: fn(&Cafe) -> Option<&str>| {
        cafe.and_then(field).map(escape).unwrap_or_default()
    };
    let checked = |field: fn(&Cafe) -> bool| {
        if cafe.is_some_and(field) { " checked" } else { "" }
    };

    format!(
        r#"<form method="post" action="{action}">
<div class="mb-3"><label class="form-label">Name</label>
<input class="form-control" type="text" name="name" value="{name}" required></div>
<div class="mb-3"><label class="form-label">Map URL</label>
<input class="form-control" type="text" name="map_url" value="{map_url}" required></div>
<div class="mb-3"><label class="form-label">Address</label>
<input class="form-control" type="text" name="address" value="{address}" required></div>
<div class="mb-3"><label class="form-label">Website</label>
<input class="form-control" type="text" name="website" value="{website}" required></div>
<div class="form-check"><input class="form-check-input" type="checkbox" name="has_alcohol" value="on"{alcohol_checked}>
<label class="form-check-label">Serves alcohol</label></div>
<div class="form-check mb-3"><input class="form-check-input" type="checkbox" name="has_lunch" value="on"{lunch_checked}>
<label class="form-check-label">Serves lunch</label></div>
<div class="mb-3"><label class="form-label">Google rating</label>
<input class="form-control" type="text" name="google_rate" value="{google_rate}"></div>
<div class="mb-3"><label class="form-label">Price range</label>
<input class="form-control" type="text" name="price_range" value="{price_range}"></div>
<button class="btn btn-primary" type="submit">Save</button>
</form>"#,
        action = action,
        name = text(|c| c.name.as_str()),
        map_url = text(|c| c.map_url.as_str()),
        address = text(|c| c.address.as_str()),
        website = text(|c| c.website.as_str()),
        alcohol_checked = checked(|c| c.has_alcohol),
        lunch_checked = checked(|c| c.has_lunch),
        google_rate = opt(|c| c.google_rate.as_deref()),
        price_range = opt(|c| c.price_range.as_deref()),
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cafe {
        Cafe {
            id: 7,
            name: "Mocha & <Co>".to_string(),
            map_url: "https://maps.example/mocha".to_string(),
            address: "1 Bean St".to_string(),
            website: "https://mocha.example".to_string(),
            has_alcohol: true,
            has_lunch: false,
            google_rate: Some("4.5".to_string()),
            price_range: None,
        }
    }

    #[test]
    fn cafes_page_escapes_names() {
        let Html(body) = cafes_page(&[sample()], None);
        assert!(body.contains("Mocha &amp; &lt;Co&gt;"));
        assert!(!body.contains("Mocha & <Co>"));
    }

    #[test]
    fn edit_page_prefills_and_carries_secret() {
        let Html(body) = edit_page(&sample(), "p w");
        assert!(body.contains("/edit/7?secret=p+w"));
        assert!(body.contains(r#"name="has_alcohol" value="on" checked"#));
        assert!(body.contains(r#"name="has_lunch" value="on">"#));
        assert!(body.contains(r#"value="4.5""#));
    }

    #[test]
    fn delete_page_embeds_ids_and_secret() {
        let Html(body) = delete_page(&[sample()], "pwd");
        assert!(body.contains(r#"action="/delete?secret=pwd""#));
        assert!(body.contains(r#"name="cafe_id" value="7""#));
    }
}
