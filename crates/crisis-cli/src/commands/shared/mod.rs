pub mod limit;
pub mod parse;
pub mod rows;
pub mod run;
