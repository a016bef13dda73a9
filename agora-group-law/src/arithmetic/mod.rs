mod modular;

pub use modular::{inverse, mul_mod, reduce};
