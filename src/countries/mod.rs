//! Countries module - the selected country pool and where pools come from

mod set;
mod source;

pub use set::{CountrySet, GuessResult, normalize};
pub use source::{Continent, CountrySource, FileCountrySource, parse_country_list};
