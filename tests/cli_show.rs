//! `navtree show`: full tree rendering.

mod common;

use common::*;
use insta::assert_snapshot;

#[test]
fn test_show_builtin_tree_ascii() {
    let env = TestEnv::new();
    let result = env.run(&["show"]);

    assert!(result.success, "{}", result.combined_output());
    assert_snapshot!(result.stdout, @r"
    docs
    |-- getting-started
    |-- + Walkthrough Guides
    |   |-- first-feature
    |   |-- first-dynamic-config
    |   |-- first-experiment
    |   `-- first-holdout
    |-- + Statsig Console
    |   |-- console/overview
    |   |-- + Feature Gates
    |   |   |-- console/featureGates/introduction
    |   |   `-- console/featureGates/rules
    |   |-- console/dynamicConfig
    |   `-- console/pulse
    |-- + Client SDKs
    |   |-- client/jsClientSDK
    |   |-- client/reactNativeSDK
    |   |-- client/reactNativeExpoSDK
    |   |-- client/iosClientSDK
    |   `-- client/androidClientSDK
    |-- + Server SDKs
    |   |-- server/nodejsServerSDK
    |   `-- server/javaSdk
    `-- restful-api
    ");
}

#[test]
fn test_show_separates_sidebars_with_blank_line() {
    let env = TestEnv::new();
    let path = env.write("sidebars.yaml", SIMPLE_YAML);
    let result = env.run(&["show", "-s", path.to_str().unwrap()]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.starts_with("docs\n|-- intro\n"));
    assert!(result.stdout.contains("`-- faq\n\napi\n`-- api/overview\n"));
}

#[test]
fn test_show_json_emits_every_node_in_order() {
    let env = TestEnv::new();
    let result = env.run(&["show", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.events();
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["source"], "<built-in>");

    let entries: Vec<_> = events.iter().filter(|e| e["event"] == "entry").collect();
    // 18 ids and 5 groups
    assert_eq!(entries.len(), 23);
    assert_eq!(entries[0]["id"], "getting-started");
    assert_eq!(entries[1]["type"], "group");
    assert_eq!(entries[1]["label"], "Walkthrough Guides");
    assert_eq!(entries[1]["path"], "docs[1]");
}
