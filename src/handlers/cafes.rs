use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::info;

use crate::db::NewCafe;
use crate::error::CatalogError;
use crate::middleware::auth::{RequireSecret, secret_query};
use crate::render;
use crate::router::CatalogState;

#[derive(Debug, Deserialize)]
pub struct CafeSearch {
    pub name: Option<String>,
}

/// Raw create/edit submission. The checkbox fields only arrive when ticked,
/// so they stay `Option<String>` here and collapse to bool on conversion.
#[derive(Debug, Deserialize)]
pub struct CafeForm {
    pub name: String,
    pub map_url: String,
    pub address: String,
    pub website: String,
    #[serde(default)]
    pub has_alcohol: Option<String>,
    #[serde(default)]
    pub has_lunch: Option<String>,
    #[serde(default)]
    pub google_rate: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub cafe_id: Option<String>,
}

impl From<CafeForm> for NewCafe {
    fn from(form: CafeForm) -> Self {
        NewCafe {
            name: form.name,
            map_url: form.map_url,
            address: form.address,
            website: form.website,
            has_alcohol: field_present(form.has_alcohol.as_deref()),
            has_lunch: field_present(form.has_lunch.as_deref()),
            google_rate: form.google_rate,
            price_range: form.price_range,
        }
    }
}

/// Checkbox semantics carried over from the original form layer: any
/// non-empty submitted value (including "off" or "false") counts as true,
/// absence or an empty value as false.
fn field_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// GET /add -> blank creation form.
pub async fn add_cafe_form() -> Html<String> {
    render::add_page()
}

/// POST /add -> insert and bounce back to the listing.
pub async fn add_cafe(
    State(state): State<CatalogState>,
    Form(form): Form<CafeForm>,
) -> Result<Redirect, CatalogError> {
    let cafe = NewCafe::from(form);
    let id = state.storage.insert(&cafe).await?;
    info!(id, name = %cafe.name, "cafe added");
    Ok(Redirect::to("/cafes"))
}

/// GET /cafes -> full listing, or a substring match on `name`.
/// Always sorted by name.
pub async fn list_cafes(
    State(state): State<CatalogState>,
    Query(params): Query<CafeSearch>,
) -> Result<Html<String>, CatalogError> {
    let filter = params.name.as_deref().filter(|s| !s.is_empty());
    let cafes = state.storage.list_sorted(filter).await?;
    Ok(render::cafes_page(&cafes, filter))
}

/// GET /edit/{cafe_id} -> pre-filled edit form carrying the secret forward.
pub async fn edit_cafe_form(
    State(state): State<CatalogState>,
    Path(cafe_id): Path<i64>,
    _auth: RequireSecret,
) -> Result<Html<String>, CatalogError> {
    let cafe = state
        .storage
        .get_by_id(cafe_id)
        .await?
        .ok_or(CatalogError::NotFound)?;
    Ok(render::edit_page(&cafe, &state.secret_pass))
}

/// POST /edit/{cafe_id} -> overwrite every field with the submitted values.
pub async fn edit_cafe(
    State(state): State<CatalogState>,
    Path(cafe_id): Path<i64>,
    _auth: RequireSecret,
    Form(form): Form<CafeForm>,
) -> Result<Redirect, CatalogError> {
    let cafe = state
        .storage
        .get_by_id(cafe_id)
        .await?
        .ok_or(CatalogError::NotFound)?;
    let update = NewCafe::from(form);
    state.storage.update_by_id(cafe.id, &update).await?;
    info!(id = cafe.id, "cafe updated");
    Ok(Redirect::to("/cafes"))
}

/// GET /delete -> every cafe with a delete control.
pub async fn delete_menu(
    State(state): State<CatalogState>,
    _auth: RequireSecret,
) -> Result<Html<String>, CatalogError> {
    let cafes = state.storage.list_all().await?;
    Ok(render::delete_page(&cafes, &state.secret_pass))
}

/// POST /delete -> remove the submitted id if it exists, then bounce back to
/// the deletion list with the secret re-appended. A missing row, or an id
/// that doesn't parse, is a silent no-op.
pub async fn delete_cafe(
    State(state): State<CatalogState>,
    _auth: RequireSecret,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, CatalogError> {
    if let Some(id) = form.cafe_id.as_deref().and_then(|raw| raw.parse::<i64>().ok()) {
        let removed = state.storage.delete_by_id(id).await?;
        if removed > 0 {
            info!(id, "cafe deleted");
        }
    }
    let target = format!("/delete?{}", secret_query(&state.secret_pass));
    Ok(Redirect::to(&target))
}
