pub mod info;
pub mod keygen;
pub mod run;

pub use info::*;
pub use keygen::*;
pub use run::*;
