//! Builds a greeting for a person.
//!
//! ```
//! use greeter::{GreetingService, Person};
//!
//! let service = GreetingService::new();
//! assert_eq!(service.greet(&Person::new("Alice")), "Hello, Alice");
//! ```
pub mod error;
pub mod models;
pub mod services;

pub use error::{GreeterError, Result};
pub use models::{Person, FALLBACK_NAME};
pub use services::GreetingService;
