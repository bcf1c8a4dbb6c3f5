mod calendar;
mod not_found;

pub use calendar::Calendar;
pub use not_found::NotFound;
