use std::sync::Arc;

use serde_json::json;

use crate::ssh::Transport;
use crate::tests::support::{runtime, target, MockTransport};
use crate::tools::{MultiEditArgs, MultiEditRemote, Tool};

fn multi_edit_tool(mock: &Arc<MockTransport>) -> MultiEditRemote {
    MultiEditRemote::new(target(), Arc::clone(mock) as Arc<dyn Transport>)
}

#[test]
fn test_multi_edit_tool_name() {
    let mock = Arc::new(MockTransport::new());
    assert_eq!(multi_edit_tool(&mock).name(), "MultiEditRemote");
}

#[test]
fn test_multi_edit_args_parsing() {
    let args: MultiEditArgs = serde_json::from_value(json!({
        "file_path": "/remote/test.txt",
        "edits": [
            {"old_string": "a", "new_string": "b"},
            {"old_string": "c", "new_string": "d", "replace_all": true}
        ]
    }))
    .unwrap();

    assert_eq!(args.edits.len(), 2);
    assert!(!args.edits[0].replace_all);
    assert!(args.edits[1].replace_all);
}

#[test]
fn test_all_edits_apply_and_upload_once() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(
            MockTransport::new().with_file("/remote/test.txt", "alpha beta gamma"),
        );
        let tool = multi_edit_tool(&mock);

        let result = tool
            .execute(json!({
                "file_path": "/remote/test.txt",
                "edits": [
                    {"old_string": "alpha", "new_string": "one"},
                    {"old_string": "gamma", "new_string": "three"}
                ]
            }))
            .await
            .unwrap();

        assert_eq!(result, "Successfully applied 2 edits to /remote/test.txt");
        assert_eq!(mock.file("/remote/test.txt").unwrap(), "one beta three");
        assert_eq!(mock.upload_count(), 1);
    });
}

#[test]
fn test_later_edit_sees_earlier_result() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new().with_file("/remote/test.txt", "a"));
        let tool = multi_edit_tool(&mock);

        tool.execute(json!({
            "file_path": "/remote/test.txt",
            "edits": [
                {"old_string": "a", "new_string": "b"},
                {"old_string": "b", "new_string": "c"}
            ]
        }))
        .await
        .unwrap();

        assert_eq!(mock.file("/remote/test.txt").unwrap(), "c");
    });
}

#[test]
fn test_failing_edit_leaves_remote_untouched() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new().with_file("/remote/test.txt", "x=1"));
        let tool = multi_edit_tool(&mock);

        // The first edit consumes "x=1", so the second can no longer match.
        let err = tool
            .execute(json!({
                "file_path": "/remote/test.txt",
                "edits": [
                    {"old_string": "x=1", "new_string": "x=2"},
                    {"old_string": "x=1", "new_string": "x=3"}
                ]
            }))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Edit 2"));
        assert!(err.to_string().contains("not found in file: x=1"));
        assert_eq!(mock.upload_count(), 0);
        assert_eq!(mock.file("/remote/test.txt").unwrap(), "x=1");
    });
}

#[test]
fn test_identical_strings_fail_with_index() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new().with_file("/remote/test.txt", "a b c"));
        let tool = multi_edit_tool(&mock);

        let err = tool
            .execute(json!({
                "file_path": "/remote/test.txt",
                "edits": [
                    {"old_string": "a", "new_string": "z"},
                    {"old_string": "b", "new_string": "b"}
                ]
            }))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Edit 2"));
        assert!(err.to_string().contains("must be different"));
        assert_eq!(mock.upload_count(), 0);
        assert_eq!(mock.file("/remote/test.txt").unwrap(), "a b c");
    });
}

#[test]
fn test_ambiguous_edit_fails_with_index_and_count() {
    let rt = runtime();
    rt.block_on(async {
        let mock =
            Arc::new(MockTransport::new().with_file("/remote/test.txt", "dup dup unique"));
        let tool = multi_edit_tool(&mock);

        let err = tool
            .execute(json!({
                "file_path": "/remote/test.txt",
                "edits": [
                    {"old_string": "unique", "new_string": "one"},
                    {"old_string": "dup", "new_string": "two"}
                ]
            }))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Edit 2"));
        assert!(err.to_string().contains("appears 2 times"));
        assert_eq!(mock.upload_count(), 0);
    });
}

#[test]
fn test_replace_all_within_sequence() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new().with_file("/remote/test.txt", "foo bar foo"));
        let tool = multi_edit_tool(&mock);

        let result = tool
            .execute(json!({
                "file_path": "/remote/test.txt",
                "edits": [
                    {"old_string": "foo", "new_string": "baz", "replace_all": true}
                ]
            }))
            .await
            .unwrap();

        assert_eq!(result, "Successfully applied 1 edits to /remote/test.txt");
        assert_eq!(mock.file("/remote/test.txt").unwrap(), "baz bar baz");
    });
}

#[test]
fn test_empty_edits_rejected() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new().with_file("/remote/test.txt", "content"));
        let tool = multi_edit_tool(&mock);

        let err = tool
            .execute(json!({
                "file_path": "/remote/test.txt",
                "edits": []
            }))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("at least one edit"));
        assert_eq!(mock.download_count(), 0);
    });
}

#[test]
fn test_single_download_for_whole_sequence() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new().with_file("/remote/test.txt", "a b c d"));
        let tool = multi_edit_tool(&mock);

        tool.execute(json!({
            "file_path": "/remote/test.txt",
            "edits": [
                {"old_string": "a", "new_string": "1"},
                {"old_string": "b", "new_string": "2"},
                {"old_string": "c", "new_string": "3"},
                {"old_string": "d", "new_string": "4"}
            ]
        }))
        .await
        .unwrap();

        assert_eq!(mock.download_count(), 1);
        assert_eq!(mock.upload_count(), 1);
        assert_eq!(mock.file("/remote/test.txt").unwrap(), "1 2 3 4");
    });
}
