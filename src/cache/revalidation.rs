//! The origin side of cache revalidation.

use crate::error::Result;

/// What an origin answered to a (possibly conditional) fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginResponse {
    /// The validator still matches; keep the cached payload.
    NotModified,
    /// New content.
    Modified {
        /// Response body.
        body: String,
        /// New validator, if the origin sent one.
        etag: Option<String>,
    },
}

/// Something the cache can ask for a payload.
///
/// `validator` is the cached ETag, sent as `If-None-Match` by HTTP origins.
pub trait Origin {
    /// Fetch the payload, conditionally when a validator is given.
    fn fetch(&self, validator: Option<&str>) -> Result<OriginResponse>;
}

impl<F> Origin for F
where
    F: Fn(Option<&str>) -> Result<OriginResponse>,
{
    fn fetch(&self, validator: Option<&str>) -> Result<OriginResponse> {
        self(validator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn closures_are_origins() {
        let seen = RefCell::new(Vec::new());
        let origin = |validator: Option<&str>| -> Result<OriginResponse> {
            seen.borrow_mut().push(validator.map(String::from));
            Ok(OriginResponse::NotModified)
        };

        assert_eq!(origin.fetch(Some("\"v1\"")).unwrap(), OriginResponse::NotModified);
        assert_eq!(origin.fetch(None).unwrap(), OriginResponse::NotModified);
        assert_eq!(*seen.borrow(), vec![Some("\"v1\"".to_string()), None]);
    }

    #[test]
    fn trait_objects_work() {
        let origin = |_: Option<&str>| -> Result<OriginResponse> {
            Ok(OriginResponse::Modified {
                body: "x".into(),
                etag: None,
            })
        };
        let dynamic: &dyn Origin = &origin;

        assert!(matches!(
            dynamic.fetch(None).unwrap(),
            OriginResponse::Modified { .. }
        ));
    }
}
