use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Member, MemberAPIError, MemberId},
    AppState,
};

#[tracing::instrument(name = "Get member route handler", skip_all)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<(StatusCode, Json<MemberResponse>), MemberAPIError> {
    let member_id = MemberId::parse(&member_id)?;
    tracing::debug!("member_id: {}", member_id);

    let member = state
        .membership_service
        .find_one(&member_id)
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?
        .ok_or(MemberAPIError::IDNotFoundError(member_id))?;

    Ok((StatusCode::OK, Json(MemberResponse::try_from(member)?)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
}

impl TryFrom<Member> for MemberResponse {
    type Error = MemberAPIError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        let id = member.id.ok_or_else(|| {
            MemberAPIError::UnexpectedError(eyre!(
                "persisted member has no id: {}",
                member.name
            ))
        })?;

        Ok(Self {
            id: *id.as_ref(),
            name: member.name.as_ref().to_owned(),
        })
    }
}
