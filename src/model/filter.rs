/// Default order of the session repository filter.
pub const DEFAULT_ORDER: i32 = i32::MIN + 50;
