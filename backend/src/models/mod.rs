//! Domain value types for school-holiday data.
//!
//! - [`region`]: the closed set of holiday regions and the label table used
//!   to recognise them in source payloads
//! - [`school_year`]: `"YYYY-YYYY"` school-year identifiers
//! - [`vacation`]: normalized vacation periods and their season
//! - [`calendar`]: calendar-day truncation and source date parsing

pub mod calendar;
pub mod region;
pub mod school_year;
pub mod vacation;

pub use calendar::{days_between, parse_source_date, CalendarDay};
pub use region::{ParseRegionError, Region, RegionLabels, RegionMatch};
pub use school_year::{ParseSchoolYearError, SchoolYear};
pub use vacation::{Season, VacationPeriod};
