mod field;
mod named;
mod real;

pub use field::FieldCurve;
pub use named::NamedCurve;
pub use real::RealCurve;
