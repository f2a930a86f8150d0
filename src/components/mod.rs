pub mod countdown;
pub mod footer;
pub mod problems_table;
pub mod register;
pub mod results;
pub mod section;
