pub mod event;
pub mod language;
pub mod year_record;
