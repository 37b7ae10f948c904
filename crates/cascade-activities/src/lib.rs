//! Cascade Activities
//!
//! Thin workflow entry points over the cascade engine and the record
//! service. Each activity is a struct of typed inputs with an async `run`:
//! - `AssignChildRecords` - cascade an ownership reassignment
//! - `SetStateChildRecords` - cascade a lifecycle state transition
//! - `ChangeProcessStage` - move a record to a named process stage
//! - `CreateEmailFromTemplate` - instantiate and stamp a templated email
//! - `compose_address` - pure composite-address formatting
//!
//! Activities gather inputs and sequence service calls; all real logic
//! lives in `cascade-engine`.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod address;
pub mod assign_children;
pub mod change_process_stage;
pub mod email_from_template;
pub mod error;
pub mod set_state_children;

// Re-exports for convenience
pub use address::compose_address;
pub use assign_children::AssignChildRecords;
pub use change_process_stage::ChangeProcessStage;
pub use email_from_template::CreateEmailFromTemplate;
pub use error::ActivityError;
pub use set_state_children::SetStateChildRecords;
