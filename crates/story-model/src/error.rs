//! Error types for the document model

use crate::id::{ElementId, GroupId, PageId};

/// Document invariant violations
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Two pages share an id
    #[error("duplicate page id: {0}")]
    DuplicatePageId(PageId),

    /// An element id appears more than once in the document
    #[error("duplicate element id: {0}")]
    DuplicateElementId(ElementId),

    /// A page designates more than one background element
    #[error("page {0} has multiple background elements")]
    MultipleBackgroundElements(PageId),

    /// An element references a group its page does not define
    #[error("element {element} references unknown group {group}")]
    UnknownGroup { element: ElementId, group: GroupId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_offender() {
        let err = ModelError::DuplicateElementId(ElementId::from("el-7"));
        assert!(err.to_string().contains("el-7"));

        let err = ModelError::UnknownGroup {
            element: ElementId::from("el-1"),
            group: GroupId::from("g-9"),
        };
        assert!(err.to_string().contains("g-9"));
    }
}
