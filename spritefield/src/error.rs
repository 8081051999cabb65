// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Only structural failures surface as `Err`: a canvas refuses to start
//! without a drawing context or with a configuration it cannot honor. Per
//! sprite failures (a load that never resolves, a plane with no room left) are
//! reported as messages through the error sink instead, see
//! [`Observers::on_error`](crate::Observers::on_error).

/// Message shown when the sprite list could not be used.
pub const SPRITE_LIST_MESSAGE: &str =
    "Unable to load sprites or sprites array is empty, try again later";

/// Fatal errors that keep a [`Canvas`](crate::Canvas) from starting.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The drawing surface has no usable context.
    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,
    /// A configuration value is out of range.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// The sprite identifier listing could not be used.
///
/// Both variants display the same user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum SpriteListError {
    /// The body was not a JSON array of strings.
    #[error("{SPRITE_LIST_MESSAGE}")]
    Malformed(#[source] serde_json::Error),
    /// The array was empty.
    #[error("{SPRITE_LIST_MESSAGE}")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_list_errors_share_the_user_message() {
        let malformed = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        assert_eq!(
            SpriteListError::Malformed(malformed).to_string(),
            SPRITE_LIST_MESSAGE
        );
        assert_eq!(SpriteListError::Empty.to_string(), SPRITE_LIST_MESSAGE);
    }

    #[test]
    fn invalid_config_names_the_field() {
        let err = CanvasError::InvalidConfig {
            field: "gap",
            reason: "must be positive",
        };
        assert_eq!(err.to_string(), "invalid configuration: gap must be positive");
    }
}
