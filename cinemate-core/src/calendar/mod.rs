//! Release calendar pipeline: normalize, filter, group, and serve.
//!
//! Data flows one way: raw snapshot -> normalize -> (stored base) ->
//! filter -> group -> view. Filtering and grouping are synchronous and
//! recomputed from the untouched base on every filter change.

pub mod filter;
pub mod group;
pub mod normalize;
pub mod service;
pub mod types;

pub use filter::apply_filters;
pub use group::{combine_and_group, month_label};
pub use normalize::normalize;
pub use service::{CalendarState, RefreshTicket, ReleaseCalendar};
pub use types::{
    CalendarEntry, ContentType, ContentTypeFilter, DateRange, FilterState, MonthGroup,
    NormalizedCatalog, UpcomingMovie, UpcomingSeries,
};
