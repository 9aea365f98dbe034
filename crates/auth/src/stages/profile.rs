use tracing::debug;

use oauthgate_core::NO_NAME_GIVEN;

use crate::context::PendingContext;
use crate::request::RawRequest;
use crate::stages::field;

/// Which display attribute a [`ProfileAttributeExtractor`] fills in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProfileAttribute {
    FirstName,
    LastName,
}

impl ProfileAttribute {
    pub fn field_name(&self) -> &'static str {
        match self {
            ProfileAttribute::FirstName => field::FIRST_NAME,
            ProfileAttribute::LastName => field::LAST_NAME,
        }
    }
}

/// Optional display attribute; never fails.
///
/// Absent attributes are reset to [`NO_NAME_GIVEN`].
#[derive(Debug, Copy, Clone)]
pub struct ProfileAttributeExtractor {
    attribute: ProfileAttribute,
}

impl ProfileAttributeExtractor {
    pub fn new(attribute: ProfileAttribute) -> Self {
        Self { attribute }
    }

    pub fn first_name() -> Self {
        Self::new(ProfileAttribute::FirstName)
    }

    pub fn last_name() -> Self {
        Self::new(ProfileAttribute::LastName)
    }

    pub fn apply(&self, request: &RawRequest, ctx: PendingContext) -> PendingContext {
        let value = request.fields().optional(self.attribute.field_name());
        debug!(attribute = ?self.attribute, present = value.is_some(), "profile attribute");

        let value = value.unwrap_or(NO_NAME_GIVEN);
        ctx.map_user(|user| match self.attribute {
            ProfileAttribute::FirstName => user.with_first_name(value),
            ProfileAttribute::LastName => user.with_last_name(value),
        })
    }
}
