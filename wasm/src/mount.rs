use snafu::{OptionExt, ensure};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::Result;
use crate::error::{AlreadyMountedSnafu, MountTargetInvalidSnafu, MountTargetMissingSnafu};

/// Guards the page-wide application mount.
pub static APP_MOUNT: MountGuard = MountGuard::new();

/// Init-once flag for a mount. The first claim wins, every later claim fails.
#[derive(Debug)]
pub struct MountGuard {
    mounted: AtomicBool,
}

impl MountGuard {
    pub const fn new() -> Self {
        Self {
            mounted: AtomicBool::new(false),
        }
    }

    pub fn claim(&self) -> Result<()> {
        let first = self
            .mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        ensure!(first, AlreadyMountedSnafu);
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// A document the application can be mounted into.
pub trait MountHost {
    type Element;
    type Target;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Narrows an element to something the renderer can mount into.
    fn into_target(element: Self::Element) -> Option<Self::Target>;
}

impl MountHost for Document {
    type Element = Element;
    type Target = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn into_target(element: Element) -> Option<HtmlElement> {
        element.dyn_into::<HtmlElement>().ok()
    }
}

/// Finds the element the application is mounted into.
pub fn locate_target<H: MountHost>(host: &H, id: &str) -> Result<H::Target> {
    let element = host
        .element_by_id(id)
        .context(MountTargetMissingSnafu { id })?;

    H::into_target(element).context(MountTargetInvalidSnafu { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::HashMap;

    /// Document stand-in: element id to "is an html element".
    struct FakeDocument(HashMap<&'static str, bool>);

    impl MountHost for FakeDocument {
        type Element = (String, bool);
        type Target = String;

        fn element_by_id(&self, id: &str) -> Option<Self::Element> {
            self.0.get(id).map(|html| (id.to_string(), *html))
        }

        fn into_target(element: Self::Element) -> Option<String> {
            let (id, html) = element;
            if html { Some(id) } else { None }
        }
    }

    fn fake_document() -> FakeDocument {
        FakeDocument(HashMap::from([("app", true), ("icon", false)]))
    }

    #[test]
    fn test_locate_existing_target() {
        let target = locate_target(&fake_document(), "app").unwrap();
        assert_eq!(target, "app");
    }

    #[test]
    fn test_locate_missing_target() {
        let result = locate_target(&fake_document(), "root");
        match result {
            Err(Error::MountTargetMissing { id }) => assert_eq!(id, "root"),
            other => panic!("expected missing target error, got {:?}", other),
        }
    }

    #[test]
    fn test_locate_non_html_target() {
        let result = locate_target(&fake_document(), "icon");
        assert!(matches!(result, Err(Error::MountTargetInvalid { .. })));
    }

    #[test]
    fn test_guard_claims_once() {
        let guard = MountGuard::new();
        assert!(!guard.is_mounted());
        assert!(guard.claim().is_ok());
        assert!(guard.is_mounted());

        let second = guard.claim();
        assert!(matches!(second, Err(Error::AlreadyMounted)));
        assert_eq!(
            second.unwrap_err().to_string(),
            "Application is already mounted"
        );
        assert!(guard.is_mounted());
    }
}
