use std::sync::Arc;

use serde_json::json;

use crate::ssh::{CommandOutput, Transport};
use crate::tests::support::{runtime, MockTransport};
use crate::tools::{LsRemote, Tool};

fn ls_tool(mock: &Arc<MockTransport>) -> LsRemote {
    LsRemote::new(Arc::clone(mock) as Arc<dyn Transport>)
}

#[test]
fn test_ls_tool_name() {
    let mock = Arc::new(MockTransport::new());
    assert_eq!(ls_tool(&mock).name(), "LSRemote");
}

#[test]
fn test_plain_listing_command() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("total 8\n-rw-r--r-- 1 u u 0 Jan  1 00:00 a.txt\n");
        let tool = ls_tool(&mock);

        let result = tool.execute(json!({"path": "/srv/app"})).await.unwrap();

        assert!(result.contains("a.txt"));
        let (command, _) = mock.last_command();
        assert_eq!(command, "ls -la '/srv/app'");
    });
}

#[test]
fn test_ignore_patterns_become_grep_filter() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("total 0\n");
        let tool = ls_tool(&mock);

        tool.execute(json!({"path": "/srv/app", "ignore": ["*.log", "tmp"]}))
            .await
            .unwrap();

        let (command, _) = mock.last_command();
        assert_eq!(command, "ls -la '/srv/app' | grep -v -E '.*.log|tmp'");
    });
}

#[test]
fn test_missing_directory_reported() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_output(CommandOutput {
            stdout: String::new(),
            stderr: "ls: cannot access '/gone': No such file or directory".to_string(),
            exit_code: 2,
        });
        let tool = ls_tool(&mock);

        let err = tool.execute(json!({"path": "/gone"})).await.unwrap_err();
        assert!(err.to_string().contains("Directory not found: /gone"));
    });
}

#[test]
fn test_empty_listing_message() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("");
        let tool = ls_tool(&mock);

        let result = tool.execute(json!({"path": "/empty"})).await.unwrap();
        assert_eq!(result, "Directory is empty");
    });
}
