pub mod ngo;

pub use ngo::Ngo;
