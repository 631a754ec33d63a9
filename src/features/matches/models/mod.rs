mod vehicle_match;

pub use vehicle_match::{MatchKey, MatchRule, NewMatch, VehicleMatch};
