//! The documentation site's own navigation tree.
//!
//! Built once on first access and shared read-only afterwards.

use std::sync::LazyLock;

use crate::models::{SidebarEntry, SidebarTree};

/// Name of the sidebar rendered on every docs page.
pub const DOCS_SIDEBAR: &str = "docs";

static DOCS: LazyLock<SidebarTree> = LazyLock::new(build_docs);

/// The built-in tree (a single `docs` sidebar).
pub fn docs() -> &'static SidebarTree {
    &DOCS
}

fn id(id: &str) -> SidebarEntry {
    SidebarEntry::id(id)
}

fn group<const N: usize>(label: &str, items: [SidebarEntry; N]) -> SidebarEntry {
    SidebarEntry::group(label, items.into())
}

fn build_docs() -> SidebarTree {
    SidebarTree::new().with_sidebar(
        DOCS_SIDEBAR,
        vec![
            id("getting-started"),
            group(
                "Walkthrough Guides",
                [
                    id("first-feature"),
                    id("first-dynamic-config"),
                    id("first-experiment"),
                    id("first-holdout"),
                ],
            ),
            group(
                "Statsig Console",
                [
                    id("console/overview"),
                    group(
                        "Feature Gates",
                        [
                            id("console/featureGates/introduction"),
                            id("console/featureGates/rules"),
                        ],
                    ),
                    id("console/dynamicConfig"),
                    id("console/pulse"),
                ],
            ),
            group(
                "Client SDKs",
                [
                    id("client/jsClientSDK"),
                    id("client/reactNativeSDK"),
                    id("client/reactNativeExpoSDK"),
                    id("client/iosClientSDK"),
                    id("client/androidClientSDK"),
                ],
            ),
            group(
                "Server SDKs",
                [id("server/nodejsServerSDK"), id("server/javaSdk")],
            ),
            id("restful-api"),
        ],
    )
}
