pub mod agent;
pub mod parser;
pub mod posters;
pub mod providers;
pub mod recommendations;
pub mod search;
