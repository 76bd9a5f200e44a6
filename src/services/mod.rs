// Generation and progression engines

pub mod pathway_service;
pub mod plan_generation_service;
pub mod progress_service;
pub mod random;
pub mod routine_service;

pub use pathway_service::PathwayService;
pub use plan_generation_service::PlanGenerationService;
pub use progress_service::ProgressService;
pub use random::{RandomSource, ThreadRngSource};
pub use routine_service::RoutineService;
