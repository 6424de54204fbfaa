use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Pipe;

// A pipe has the same shape as an `Option`: `null` when it holds nothing.
impl<T: Serialize> Serialize for Pipe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get_ref().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Pipe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Pipe::from)
    }
}
