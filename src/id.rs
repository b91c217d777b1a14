use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a placed object, minted by whoever supplies the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is plenty for logs
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}

/// An object as supplied by the upload side: an id and an image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceObject {
    pub id: ObjectId,
    pub image: String,
}

impl SurfaceObject {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            image: image.into(),
        }
    }
}
