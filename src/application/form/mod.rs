pub mod draft;
pub mod input;
pub mod submission;

pub use draft::{DraftAction, DraftRejected, EmployeeDraft, ExperienceDraft, ExperienceField};
pub use input::{EmployeeForm, ExperienceForm};
pub use submission::prepare_submission;
