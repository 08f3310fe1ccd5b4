//! HTTP request handlers for API endpoints.

pub mod docs;
pub mod health;
pub mod hospitals;

pub use docs::docs_handler;
pub use health::{health_handler, index_handler};
pub use hospitals::{
    create_hospital_handler, delete_hospital_handler, fallback_handler, get_hospital_handler,
    list_hospitals_handler, method_not_allowed_handler, update_hospital_handler,
};
