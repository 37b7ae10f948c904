//! Cascade Engine - Identity Resolution and Relationship Cascade
//!
//! The part of the toolkit with real logic:
//! - Parses heterogeneous record references (URL or serialized identity)
//!   into canonical identities, disambiguating numeric type codes through
//!   remote metadata
//! - Resolves named one-to-many relationships into (child type, foreign key)
//!   descriptors
//! - Locates the children of a parent through one filtered query
//! - Cascades a caller-supplied mutation across every child, per name in a
//!   `;`-separated relationship list
//!
//! # Example
//!
//! ```rust,ignore
//! use cascade_engine::{parse_reference, CascadeExecutor};
//! use cascade_core::{Mutation, OwnerKind};
//!
//! # async fn example(service: std::sync::Arc<dyn cascade_core::RecordService>) -> Result<(), Box<dyn std::error::Error>> {
//! let parent = parse_reference(service.as_ref(), "https://org.crm.example.com/main.aspx?etc=2&id=5f6e...").await?;
//!
//! let executor = CascadeExecutor::new(service);
//! let outcome = executor
//!     .cascade(&parent, "contact_tasks;contact_notes", &Mutation::AssignOwner {
//!         owner_id: uuid::Uuid::new_v4(),
//!         owner_kind: OwnerKind::Team,
//!     })
//!     .await?;
//!
//! println!("mutated {} children", outcome.children_mutated);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod executor;
pub mod locator;
pub mod parser;
pub mod relationship;

// Re-exports for convenience
pub use error::CascadeError;
pub use executor::{CascadeExecutor, CascadeOutcome};
pub use locator::find_children;
pub use parser::parse_reference;
pub use relationship::resolve_relationship;
