pub mod error;
pub mod stream;
pub mod value;
pub mod factory;
pub mod node;
pub mod entities;
pub mod trunk;
