pub mod a_star;
pub mod welsh_powell;
