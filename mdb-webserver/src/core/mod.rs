pub use mdb_core::{db, repositories, usecases};

pub mod entities {
    pub use mdb_core::entities::*;
    #[cfg(test)]
    pub use mdb_entities::builders::*;
}

pub mod prelude {

    pub use mdb_application::error::*;

    pub use super::{db::*, entities::*, repositories::*};
}
