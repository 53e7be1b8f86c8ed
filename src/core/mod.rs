// Domain-layer modules and shared errors/models
pub mod generator {
    pub use crate::generator::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod store {
    pub use crate::store::*;
}

pub mod errors {
    pub use crate::errors::*;
}
