mod autd3;

pub use autd3::AUTD3;
