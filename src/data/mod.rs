pub mod id;

pub use id::{ObjectId, ObjectIdGenerator, ParseObjectIdError};
