use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Member, MemberAPIError, MemberName, MembershipError},
    AppState,
};

#[tracing::instrument(name = "Register member route handler", skip_all)]
pub async fn register_member(
    State(state): State<AppState>,
    request: Result<Json<RegisterMemberRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterMemberResponse>), MemberAPIError> {
    let Json(request) = request?;
    let member_name = MemberName::parse(request.name)?;

    let member_id = state
        .membership_service
        .register(Member::new(member_name))
        .await
        .map_err(|e| match e {
            MembershipError::DuplicateName(name) => {
                MemberAPIError::DuplicateNameError(name)
            }
            e => MemberAPIError::UnexpectedError(eyre!(e)),
        })?;

    let response = Json(RegisterMemberResponse {
        id: *member_id.as_ref(),
    });

    Ok((StatusCode::CREATED, response))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct RegisterMemberRequest {
    pub name: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterMemberResponse {
    pub id: i64,
}
