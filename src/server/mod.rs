//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP handlers, business logic, data access
//! and the infrastructure that wires them together. Axum serves the API and SeaORM
//! talks to the database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, uniqueness rules and orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard
//! - **Utilities** (`util/`) - Password hashing, token signing and input checks
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token keys)
//! - **Startup** (`startup`) - Logging, database connection and migrations
//! - **Router** (`router`) - Route table, OpenAPI document, Swagger UI and sitemap
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** runs the `AuthGuard` where required and converts DTOs to params
//! 3. **Service** validates and executes the operation through repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
