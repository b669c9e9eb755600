//! # identity-service-api
//!
//! Shared API types for the identity service.
//! This crate is designed to be WASM-compatible and can be used in both
//! backend (Rust) and frontend (WASM/TypeScript via wasm-bindgen)
//! applications.
//!
//! ## Features
//!
//! - Generic response envelope (`ApiResponse<T>`) with a staged builder
//! - Request DTOs (RegisterRequest, LoginRequest, etc.)
//! - Response DTOs (TokenResponse, TokenSession)
//! - Error taxonomy (AuthError) and error response format (ErrorResponse)
//!
//! ## Example
//!
//! ```rust
//! use identity_service_api::{ApiResponse, TokenResponse};
//!
//! let token = TokenResponse::new("access", "refresh", 300);
//! let response = ApiResponse::builder()
//!     .status_code(200)
//!     .message("success")
//!     .body(token)
//!     .build();
//! assert_eq!(response.status_code(), 200);
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod result;

// Re-exports for convenient access
pub use error::{AuthError, ErrorResponse};
pub use requests::*;
pub use responses::*;
pub use result::{ApiResponse, ApiResponseBuilder};
