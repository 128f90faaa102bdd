pub mod api;
pub mod models;
pub mod processors;

pub use api::{DueReport, evaluate_due_players};
pub use models::{PlayerBaseline, Season, SeasonId};
pub use processors::DueAssessment;
