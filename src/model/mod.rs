pub mod bands;
pub mod categories;
pub mod dimensions;
pub mod raw;
pub mod record;
pub mod tables;
