use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;
use std::error::Error;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::HelpfulError;
use crate::types::{ErrorCode, Variant};

impl<V: Variant> Display for HelpfulError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<V: Variant> Debug for HelpfulError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpfulError")
            .field("variant", &V::NAME)
            .field("message", &self.message)
            .field("metadata", &self.metadata)
            .field("code", &self.code())
            .finish()
    }
}

impl<V: Variant> Clone for HelpfulError<V> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            metadata: self.metadata.clone(),
            original: self.original.clone(),
            variant: PhantomData,
        }
    }
}

impl<V: Variant> Error for HelpfulError<V> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause().map(|cause| cause.as_error() as &(dyn Error + 'static))
    }
}

/// Serializes as `{"code"?: {..}, "message": ".."}`, keys in sorted order.
///
/// `code` is only written when it carries a non-empty slug.
impl<V: Variant> Serialize for HelpfulError<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let code = self.code().filter(ErrorCode::has_slug);

        let mut map = serializer.serialize_map(Some(1 + usize::from(code.is_some())))?;
        if let Some(code) = &code {
            map.serialize_entry("code", code)?;
        }
        map.serialize_entry("message", &self.message)?;
        map.end()
    }
}
