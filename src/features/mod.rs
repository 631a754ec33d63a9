pub mod admin;
pub mod contact;
pub mod matches;
pub mod reports;
pub mod search;
