use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use super::MemberResponse;
use crate::{domain::MemberAPIError, AppState};

#[tracing::instrument(name = "Get member list route handler", skip_all)]
pub async fn get_member_list(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MemberListResponse>), MemberAPIError> {
    let member_list = state
        .membership_service
        .list_members()
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?;
    tracing::debug!("member count: {}", member_list.len());

    let response = Json(MemberListResponse {
        members: member_list
            .into_iter()
            .map(MemberResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?,
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}
