pub mod config;
pub mod logging;
pub mod persistence;
pub mod record;
pub mod schedule;
#[cfg(feature = "sheet")]
pub mod sheet;
pub mod validation;

pub use config::GeneratorConfig;
pub use persistence::file::generate_schedule_data;
pub use persistence::{
    EmitOptions, ScheduleDataError, ScheduleDataResult, load_schedule_from_csv,
    load_schedule_from_reader, render_schedule_js, save_schedule_to_js,
};
pub use record::{REQUIRED_COLUMNS, ScheduleRecord};
pub use schedule::ScheduleCollection;
pub use validation::ValidationError;
