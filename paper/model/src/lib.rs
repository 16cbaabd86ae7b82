pub mod config;

pub mod prelude {
    pub use crate::config::*;
}
