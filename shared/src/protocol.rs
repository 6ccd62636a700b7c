use crate::HEADER_AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

// =========================================================
// Booking State Transitions
// =========================================================

/// Booking state transitions are dedicated action endpoints
/// (`POST /bookings/{id}/{action}`), never a generic field update —
/// the server keeps authority over the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    Approve,
    Reject,
}

impl BookingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingAction::Approve => "approve",
            BookingAction::Reject => "reject",
        }
    }
}

impl Display for BookingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =========================================================
// Auth Header
// =========================================================

/// Header name/value pair carrying the session token.
pub fn bearer_header(token: &str) -> (&'static str, String) {
    (HEADER_AUTHORIZATION, format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_carries_token_verbatim() {
        let (name, value) = bearer_header("iti-shield-secret-token-123");
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer iti-shield-secret-token-123");
    }

    #[test]
    fn test_booking_action_paths() {
        assert_eq!(BookingAction::Approve.to_string(), "approve");
        assert_eq!(BookingAction::Reject.as_str(), "reject");
    }
}
