pub const DEFAULT_LOCATION: &str = "Seneca Polytechnic";
pub const MIN_RADIUS: u32 = 100;
pub const MAX_RADIUS: u32 = 5000;
pub const DEFAULT_RADIUS: u32 = 500;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 5;
pub const DEFAULT_COUNT: usize = 3;
pub const MAX_LOCATION_LENGTH: usize = 256;
