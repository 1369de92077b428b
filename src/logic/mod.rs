//! League logic: pairing, round packing, result commits, standings.

mod pairing;
mod results;
mod rounds;
mod standings;

pub use pairing::generate_pairs;
pub use results::{commit_result, submit_match_result, validate_result};
pub use rounds::{generate_schedule, pack_rounds, regenerate_schedule};
pub use standings::compute_standings;
