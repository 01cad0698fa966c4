//! HTTP handlers for browsing the raw tip catalog

use axum::{extract::Query, Json};
use serde::Deserialize;
use shared::{farming_tips, Crop, FarmingTip, State as IndianState, TipCategory};

/// Query parameters for catalog filtering
#[derive(Debug, Deserialize)]
pub struct TipQuery {
    pub crop: Option<Crop>,
    pub state: Option<IndianState>,
    pub category: Option<TipCategory>,
}

/// List catalog entries matching the optional filters
///
/// Plain predicate filtering; no scoring and no weather involved.
pub async fn list_tips(Query(query): Query<TipQuery>) -> Json<Vec<FarmingTip>> {
    let tips = farming_tips()
        .iter()
        .filter(|tip| {
            let crop_match = query.crop.map_or(true, |c| tip.crops.contains(&c));
            let state_match = query.state.map_or(true, |s| tip.states.contains(&s));
            let category_match = query.category.map_or(true, |c| tip.category == c);
            crop_match && state_match && category_match
        })
        .cloned()
        .collect();

    Json(tips)
}
