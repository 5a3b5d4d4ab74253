//! HTTP API Handlers and Routes
//!
//! The JSON side of the server, built on the Axum web framework. Browser
//! front-ends call it to obtain the credential they keep in their session.
//!
//! # API Endpoints
//!
//! ## Authentication (`/api/auth`)
//! - `POST /api/auth/login` - Login with a form body and receive a bearer token
//! - `POST /api/auth/login/json` - Same, with a JSON body
//!
//! ## Status
//! - `GET /api` - Liveness banner
//! - `GET /health` - Health check endpoint
//!
//! Failed sign-ins answer `401` with `WWW-Authenticate: Bearer` and a
//! `{"error": ...}` body.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
