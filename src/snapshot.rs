// ABOUTME: JSON snapshot parsing for session data exported by the backend
// ABOUTME: Accepts a single session object or an array of sessions from text or a file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use squadtrack_core::errors::{AppError, AppResult};
use squadtrack_core::models::Session;
use tracing::debug;

/// Snapshot document: one session or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Many(Vec<Session>),
    One(Box<Session>),
}

/// Parse a single session
///
/// # Errors
///
/// Returns a serialization error when the text is not a valid session object
pub fn parse_session(text: &str) -> AppResult<Session> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a session object or an array of sessions
///
/// # Errors
///
/// Returns an invalid-input error when the text is neither shape
pub fn parse_sessions(text: &str) -> AppResult<Vec<Session>> {
    // Report the precise location when the text is not JSON at all
    let value: serde_json::Value = serde_json::from_str(text)?;
    let document = serde_json::from_value(value).map_err(|error| {
        AppError::invalid_input("snapshot must be a session object or an array of sessions")
            .with_source(error)
    })?;

    Ok(match document {
        SnapshotDocument::Many(sessions) => sessions,
        SnapshotDocument::One(session) => vec![*session],
    })
}

/// Load sessions from a snapshot file
///
/// # Errors
///
/// Returns a storage error when the file cannot be read, otherwise the errors
/// of [`parse_sessions`]
pub fn load_sessions(path: impl AsRef<Path>) -> AppResult<Vec<Session>> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let text = fs::read_to_string(path).map_err(|error| {
        AppError::storage(format!("failed to read snapshot {shown}"))
            .with_resource_id(shown.clone())
            .with_source(error)
    })?;

    let sessions = parse_sessions(&text)
        .map_err(|error| error.with_resource_id(shown.clone()))?;

    debug!(path = %shown, sessions = sessions.len(), "Loaded session snapshot");
    Ok(sessions)
}

/// Find a session by id among loaded sessions
///
/// # Errors
///
/// Returns a not-found error naming the id when no session matches
pub fn find_session(sessions: &[Session], session_id: i64) -> AppResult<&Session> {
    sessions
        .iter()
        .find(|session| session.id == session_id)
        .ok_or_else(|| {
            AppError::not_found(format!("session {session_id}"))
                .with_details(json!({ "available": sessions.iter().map(|s| s.id).collect::<Vec<_>>() }))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadtrack_core::errors::ErrorCode;

    #[test]
    fn test_single_object_and_array_both_accepted() {
        let one = parse_sessions(r#"{"id": 1}"#).unwrap();
        let many = parse_sessions(r#"[{"id": 1}, {"id": 2, "date": null}]"#).unwrap();

        assert_eq!(one.len(), 1);
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn test_wrong_shape_is_invalid_input() {
        let error = parse_sessions(r#"{"name": "no id"}"#).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);

        let error = parse_sessions("[{").unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }
}
