mod sine;
mod r#static;

pub use r#static::Static;
pub use sine::Sine;
