mod traits;
pub use traits::*;

mod types;
pub use types::*;

mod processor;
pub use processor::*;


#[cfg(test)]
mod processor_tests;
