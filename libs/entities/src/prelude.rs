pub use super::{comment::Entity as Comment, link::Entity as Link};
