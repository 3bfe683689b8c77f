//! Query modules for the Nudge SDK.
//!
//! Each module provides a query struct that borrows the SDK's
//! [`ApiClient`](crate::client::ApiClient) and exposes typed methods returning
//! `Result<T>`.

pub mod insights;
pub mod purchases;

pub use insights::InsightQuery;
pub use purchases::PurchaseQuery;
